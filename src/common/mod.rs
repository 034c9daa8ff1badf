//! 公共工具模块

/// 生成响应体的日志预览
///
/// 非 UTF-8 内容做有损转换，超过 `max_bytes` 时在字符边界截断并追加省略号
pub fn body_preview(body: &[u8], max_bytes: usize) -> String {
    let text = String::from_utf8_lossy(body);
    if text.len() <= max_bytes {
        return text.into_owned();
    }

    let mut end = max_bytes;
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_body_unchanged() {
        assert_eq!(body_preview(b"<html>oops</html>", 64), "<html>oops</html>");
    }

    #[test]
    fn test_truncates_on_char_boundary() {
        // "错" 占 3 字节，截断点落在字符中间时应回退
        let body = "错误页面".as_bytes();
        assert_eq!(body_preview(body, 4), "错...");
    }

    #[test]
    fn test_invalid_utf8_is_lossy() {
        assert_eq!(body_preview(&[0x66, 0xff, 0x6f], 16), "f\u{fffd}o");
    }
}
