use super::*;

#[test]
fn join_non_empty_test() {
    assert_eq!(None, join_non_empty(Vec::<String>::new()));
    assert_eq!(None, join_non_empty(["", ""]));
    assert_eq!(Some("a".to_owned()), join_non_empty(["a"]));
    assert_eq!(Some("a, c".to_owned()), join_non_empty(["a", "", "c"]));
}

#[test]
fn non_empty_test() {
    assert_eq!(None, non_empty(None));
    assert_eq!(None, non_empty(Some("")));
    assert_eq!(Some("x"), non_empty(Some("x")));
}
