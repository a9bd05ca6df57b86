use syntax::token::{Token, TokenKind};
use token_stream::raw::source_text;
use token_stream::{RawToken, TokenStream};

fn dump(stream: &TokenStream) -> String {
    stream
        .iter()
        .enumerate()
        .map(|(index, token)| {
            format!(
                "{} {} {} {:?}",
                index,
                token.line(),
                token.kind(),
                token.text()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn decodes_token_get_all_notation() {
    let raw: Vec<RawToken> = serde_json::from_str(
        r#"[["T_OPEN_TAG", "<?php\n", 1], ["T_STRING", "foo"], "(", ")", ";"]"#,
    )
    .unwrap();
    assert_eq!(
        raw,
        vec![
            RawToken::from((TokenKind::OpenTag, "<?php\n", 1)),
            RawToken::from((TokenKind::Identifier, "foo")),
            RawToken::Char('('),
            RawToken::Char(')'),
            RawToken::Char(';'),
        ]
    );
    assert_eq!(source_text(&raw), "<?php\nfoo();");
}

#[test]
fn rejects_unknown_kind_names() {
    let raw = serde_json::from_str::<Vec<RawToken>>(r#"[["T_NOPE", "x"]]"#);
    assert!(raw.is_err());
}

#[test]
fn dump_of_a_small_script() {
    let raw: Vec<RawToken> = serde_json::from_str(
        r#"[
            ["T_OPEN_TAG", "<?php\n", 1],
            ["T_VARIABLE", "$a", 2],
            ["T_WHITESPACE", " ", 2],
            "=",
            ["T_WHITESPACE", " ", 2],
            ["T_CONSTANT_ENCAPSED_STRING", "'x\ny'", 2],
            ";",
            ["T_WHITESPACE", "\n", 3],
            ["T_STRING", "foo", 99],
            "(",
            ")",
            ";"
        ]"#,
    )
    .unwrap();
    let stream = TokenStream::from_raw(raw).unwrap();
    insta::assert_snapshot!(dump(&stream), @r###"
    0 1 T_OPEN_TAG "<?php\n"
    1 2 T_VARIABLE "$a"
    2 2 T_WHITESPACE " "
    3 2 T_EQUAL "="
    4 2 T_WHITESPACE " "
    5 2 T_CONSTANT_ENCAPSED_STRING "'x\ny'"
    6 3 T_SEMICOLON ";"
    7 3 T_WHITESPACE "\n"
    8 4 T_STRING "foo"
    9 4 T_OPEN_ROUND "("
    10 4 T_CLOSE_ROUND ")"
    11 4 T_SEMICOLON ";"
    "###);
}

#[test]
fn collected_tokens_keep_their_lines() {
    let stream: TokenStream = vec![
        Token::new(TokenKind::Identifier, "a", 7),
        Token::new(TokenKind::Identifier, "b", 9),
    ]
    .into_iter()
    .collect();
    let lines: Vec<u32> = (&stream).into_iter().map(Token::line).collect();
    assert_eq!(lines, vec![7, 9]);
}
