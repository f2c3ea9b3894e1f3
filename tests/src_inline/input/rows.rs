use super::*;

#[test]
fn test_quoted_cells_keep_commas() {
    let text = "totalCalls,highlights\n100,\"Met 2 DMEs, booked zoom\"\n";
    let rows = read_rows(text, Tokenizer::Quoted).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1], vec!["100".to_string(), "Met 2 DMEs, booked zoom".to_string()]);
}

#[test]
fn test_naive_split_breaks_quoted_commas() {
    let text = "totalCalls,highlights\n100,\"Met 2 DMEs, booked zoom\"\n";
    let rows = read_rows(text, Tokenizer::Naive).unwrap();
    assert_eq!(rows[1].len(), 3);
    assert_eq!(rows[1][1], "\"Met 2 DMEs");
}

#[test]
fn test_only_first_two_lines_are_returned() {
    let text = "a,b\n1,2\n3,4\n5,6\n";
    for tokenizer in [Tokenizer::Quoted, Tokenizer::Naive] {
        let rows = read_rows(text, tokenizer).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], vec!["1".to_string(), "2".to_string()]);
    }
}

#[test]
fn test_blank_second_line_is_an_empty_row() {
    let text = "a,b\n\n1,2\n";
    for tokenizer in [Tokenizer::Quoted, Tokenizer::Naive] {
        let rows = read_rows(text, tokenizer).unwrap();
        assert_eq!(rows.len(), 2, "{tokenizer:?}");
        assert!(rows[1].iter().all(|cell| cell.trim().is_empty()), "{tokenizer:?}");
    }
}

#[test]
fn test_line_count_follows_line_feeds() {
    for tokenizer in [Tokenizer::Quoted, Tokenizer::Naive] {
        assert_eq!(read_rows("a,b", tokenizer).unwrap().len(), 1);
        assert_eq!(read_rows("", tokenizer).unwrap().len(), 1);
        assert_eq!(read_rows("a,b\n", tokenizer).unwrap().len(), 2);
    }
}

#[test]
fn test_crlf_line_endings() {
    let rows = read_rows("a,b\r\n1,2\r\n", Tokenizer::Quoted).unwrap();
    assert_eq!(rows[1], vec!["1".to_string(), "2".to_string()]);

    let rows = read_rows("a,b\r\n1,2\r\n", Tokenizer::Naive).unwrap();
    assert_eq!(rows[1][1].trim(), "2");
}
