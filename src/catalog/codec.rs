use encoding_rs::WINDOWS_1252;

/// Decodes catalog bytes, trying UTF-8 first and falling back to
/// Windows-1252 when the bytes are not valid UTF-8.
///
/// The fallback covers files exported by Windows spreadsheet tools in the
/// Latin-1 family; every byte maps to some character there, so decoding
/// itself cannot fail. A UTF-8 BOM is stripped when present.
pub fn decode_text(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.trim_start_matches('\u{feff}').to_string(),
        Err(_) => {
            tracing::debug!("Input is not valid UTF-8, decoding as Windows-1252");
            let (decoded, _, _) = WINDOWS_1252.decode(bytes);
            decoded.into_owned()
        }
    }
}

/// Parses delimited text into a header and raw string records.
///
/// `flexible` keeps short rows readable (missing trailing cells come back
/// empty via positional lookup) and `Trim::All` drops the stray whitespace
/// hand-edited files accumulate.
pub fn read_table(text: &str, delimiter: u8) -> Result<(Vec<String>, Vec<Vec<String>>), csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let columns: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        records.push(record.iter().map(|v| v.to_string()).collect());
    }

    Ok((columns, records))
}
