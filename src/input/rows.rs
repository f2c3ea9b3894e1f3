use crate::input::{ImportError, Tokenizer};

/// Splits `text` on line feeds and tokenizes the first two lines: the header
/// and the data row. A blank second line yields an empty data row. Later
/// lines are never tokenized, and the result holds fewer than two rows only
/// when the text has fewer than two lines.
pub fn read_rows(text: &str, tokenizer: Tokenizer) -> Result<Vec<Vec<String>>, ImportError> {
    text.split('\n')
        .take(2)
        .map(|line| match tokenizer {
            Tokenizer::Quoted => quoted_cells(line),
            Tokenizer::Naive => Ok(naive_cells(line)),
        })
        .collect()
}

fn quoted_cells(line: &str) -> Result<Vec<String>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(record) => {
            let record = record.map_err(|e| ImportError::Parse(e.to_string()))?;
            Ok(record.iter().map(str::to_string).collect())
        }
        None => Ok(Vec::new()),
    }
}

fn naive_cells(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/rows.rs"]
mod tests;
