//! Time helpers for connection bookkeeping and client-side display.
//!
//! Messages carry no timestamp on the wire; these helpers only feed logs
//! and the client's terminal rendering.

use chrono::{Local, TimeZone, Utc};

/// Current Unix timestamp in milliseconds (UTC).
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Render a Unix millisecond timestamp as RFC 3339 in the local timezone.
///
/// Falls back to the raw number if the timestamp is out of chrono's range.
pub fn millis_to_local_rfc3339(timestamp_millis: i64) -> String {
    let seconds = timestamp_millis.div_euclid(1000);
    let nanos = (timestamp_millis.rem_euclid(1000) * 1_000_000) as u32;
    match Local.timestamp_opt(seconds, nanos) {
        chrono::LocalResult::Single(dt) => dt.to_rfc3339(),
        _ => timestamp_millis.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_returns_positive_value() {
        // テスト項目: now_millis が正の値を返す
        // given (前提条件):

        // when (操作):
        let timestamp = now_millis();

        // then (期待する結果):
        assert!(timestamp > 0);
    }

    #[test]
    fn test_now_millis_is_monotonic_enough() {
        // テスト項目: now_millis が時間経過とともに減少しない
        // given (前提条件):
        let first = now_millis();

        // when (操作):
        std::thread::sleep(std::time::Duration::from_millis(10));
        let second = now_millis();

        // then (期待する結果):
        assert!(second >= first);
    }

    #[test]
    fn test_millis_to_local_rfc3339_roundtrips_through_chrono() {
        // テスト項目: ミリ秒タイムスタンプが RFC 3339 形式に変換される
        // given (前提条件):
        // 2023-01-01 00:00:00 UTC in milliseconds
        let timestamp = 1_672_531_200_000;

        // when (操作):
        let result = millis_to_local_rfc3339(timestamp);

        // then (期待する結果): パース可能な RFC 3339 文字列が返る
        let parsed = chrono::DateTime::parse_from_rfc3339(&result).unwrap();
        assert_eq!(parsed.timestamp_millis(), timestamp);
    }

    #[test]
    fn test_millis_to_local_rfc3339_keeps_millisecond_precision() {
        // テスト項目: ミリ秒の端数が失われない
        // given (前提条件):
        let timestamp = 1_672_531_200_123;

        // when (操作):
        let result = millis_to_local_rfc3339(timestamp);

        // then (期待する結果):
        let parsed = chrono::DateTime::parse_from_rfc3339(&result).unwrap();
        assert_eq!(parsed.timestamp_millis(), timestamp);
    }
}
