use super::*;

#[test]
fn completion_message_interpolates_count() {
    assert_eq!(completion_message(5), "축하합니다! 5개의 문장연습을 모두 마쳤습니다.");
}

#[test]
fn completion_message_handles_zero() {
    assert_eq!(completion_message(0), "축하합니다! 0개의 문장연습을 모두 마쳤습니다.");
}
