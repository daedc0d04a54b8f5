use sunborn_core::AddressSet;

#[test]
fn parse_drops_header_blanks_and_duplicates() {
    let set = AddressSet::parse("address\nFoo\n\nFoo\n");

    assert_eq!(set.len(), 1);
    assert!(set.contains("Foo"));
    assert!(!set.contains("address"));
}

#[test]
fn parse_drops_wallet_header_token() {
    let set = AddressSet::parse("wallet\n0xAAA\n0xBBB\n");

    assert_eq!(set.len(), 2);
    assert!(!set.contains("wallet"));
    assert!(set.contains("0xAAA"));
    assert!(set.contains("0xBBB"));
}

#[test]
fn parse_trims_surrounding_whitespace() {
    let set = AddressSet::parse("  0xAAA  \n\t0xBBB\r\n   \n");

    assert_eq!(set.len(), 2);
    assert!(set.contains("0xAAA"));
    assert!(set.contains("0xBBB"));
}

#[test]
fn matching_is_case_sensitive() {
    let set = AddressSet::parse("0xAbC\n");

    assert!(set.contains("0xAbC"));
    assert!(!set.contains("0xabc"));
}

#[test]
fn parse_of_empty_text_yields_empty_set() {
    let set = AddressSet::parse("");

    assert!(set.is_empty());
}

#[test]
fn header_token_inside_an_address_is_kept() {
    // Only a line that is exactly the header token is excluded.
    let set = AddressSet::parse("wallet-of-foo\naddressable\n");

    assert_eq!(set.len(), 2);
    assert!(set.contains("wallet-of-foo"));
    assert!(set.contains("addressable"));
}
