use crate::protocol::tokenizer::Tokenizer;

/// Inbound message kind, taken from the leading token.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum MessageKind {
    Init,
    See,
    SenseBody,
    Error,
    Other(String),
}

impl MessageKind {
    pub fn classify(msg: &str) -> MessageKind {
        match Tokenizer::new(msg).next_token() {
            Some("init") => MessageKind::Init,
            Some("see") => MessageKind::See,
            Some("sense_body") => MessageKind::SenseBody,
            Some("error") => MessageKind::Error,
            Some(other) => MessageKind::Other(other.to_owned()),
            None => MessageKind::Other(String::new()),
        }
    }
}

/// Decodes one datagram. The server pads with NULs.
pub fn decode(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .trim_end_matches(|c: char| c == '\0' || c.is_whitespace())
        .to_owned()
}

/// Text after the leading tag of an `(error ...)` message.
pub fn error_reason(msg: &str) -> String {
    let mut tokens = Tokenizer::new(msg);
    let _tag = tokens.next_token();
    tokens.collect::<Vec<_>>().join(" ")
}
