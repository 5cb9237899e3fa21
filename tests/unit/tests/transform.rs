use glyphpass_password::transform_word;

#[test]
fn transform_table() {
    assert_eq!("1085ter", transform_word("lobster"));
    assert_eq!("10859", transform_word("LOBSQ"));
    assert_eq!("he110 w0r1d", transform_word("hello world"));
}

#[test]
fn transform_idempotent() {
    for word in ["lobster", "BOOLS", "quo", "plain text", "日本語", ""] {
        let once = transform_word(word);
        assert_eq!(once, transform_word(&once));
    }
}

#[test]
fn transform_unmapped_pass_through() {
    let word = "acdefghijkmnprtuvwxyz-!_ACDEF";
    assert_eq!(word, transform_word(word));
}
