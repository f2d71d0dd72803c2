//! Markup event tokenizer
//!
//! Turns raw markup text into a stream of start-tag, end-tag, and text
//! events. Deliberately naive and tailored to the READER site structure:
//! ASCII case-insensitive tag and attribute names, a minimal entity set,
//! and no error reporting. Structural judgement belongs to the tree
//! builder; the tokenizer only segments the byte stream.

/// One markup event
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Opening tag with its attributes in document order
    Start {
        name: String,
        attrs: Vec<(String, String)>,
    },
    /// Closing tag
    End { name: String },
    /// Literal character data between tags
    Text(String),
}

/// Streaming tokenizer over one markup document
pub struct Tokenizer<'a> {
    input: &'a [u8],
    pos: usize,
    /// End event queued by a self-closing start tag
    pending: Option<Event>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.as_bytes(),
            pos: 0,
            pending: None,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Advance past the terminator sequence, or to end of input
    fn skip_until(&mut self, terminator: &[u8]) {
        while self.pos < self.input.len() {
            if self.input[self.pos..].starts_with(terminator) {
                self.pos += terminator.len();
                return;
            }
            self.pos += 1;
        }
    }

    fn read_name(&mut self) -> String {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b.is_ascii_alphanumeric()) {
            self.pos += 1;
        }
        String::from_utf8_lossy(&self.input[start..self.pos]).to_ascii_lowercase()
    }

    /// Read one attribute, positioned after leading whitespace.
    ///
    /// Bare attributes (no `=`) get an empty value; unquoted values run to
    /// the next whitespace or `>`.
    fn read_attribute(&mut self) -> Option<(String, String)> {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if !b.is_ascii_whitespace() && b != b'=' && b != b'>' && b != b'/')
        {
            self.pos += 1;
        }
        if self.pos == start {
            return None;
        }
        let name = String::from_utf8_lossy(&self.input[start..self.pos]).to_ascii_lowercase();

        self.skip_whitespace();
        if self.peek() != Some(b'=') {
            return Some((name, String::new()));
        }
        self.pos += 1;
        self.skip_whitespace();

        let value = match self.peek() {
            Some(quote @ (b'"' | b'\'')) => {
                self.pos += 1;
                let vstart = self.pos;
                while matches!(self.peek(), Some(b) if b != quote) {
                    self.pos += 1;
                }
                let value = String::from_utf8_lossy(&self.input[vstart..self.pos]).into_owned();
                self.pos += 1; // closing quote, if present
                value
            }
            _ => {
                let vstart = self.pos;
                while matches!(self.peek(), Some(b) if !b.is_ascii_whitespace() && b != b'>') {
                    self.pos += 1;
                }
                String::from_utf8_lossy(&self.input[vstart..self.pos]).into_owned()
            }
        };
        Some((name, decode_entities(&value)))
    }

    /// Read a tag following `<`, returning its event(s).
    ///
    /// A self-closing start tag yields the start event now and queues the
    /// end event for the next call.
    fn read_tag(&mut self) -> (Event, Option<Event>) {
        if self.peek() == Some(b'/') {
            self.pos += 1;
            let name = self.read_name();
            self.skip_until(b">");
            return (Event::End { name }, None);
        }

        let name = self.read_name();
        let mut attrs = Vec::new();
        let mut self_closing = false;

        loop {
            self.skip_whitespace();
            match self.peek() {
                None | Some(b'>') => {
                    self.pos += 1;
                    break;
                }
                Some(b'/') if self.peek_at(1) == Some(b'>') => {
                    self.pos += 2;
                    self_closing = true;
                    break;
                }
                _ => match self.read_attribute() {
                    Some(attr) => attrs.push(attr),
                    // stray byte inside the tag, step over it
                    None => {
                        self.pos += 1;
                    }
                },
            }
        }

        let end = self_closing.then(|| Event::End { name: name.clone() });
        (Event::Start { name, attrs }, end)
    }

    fn read_text(&mut self) -> Event {
        let start = self.pos;
        while matches!(self.peek(), Some(b) if b != b'<') {
            self.pos += 1;
        }
        let raw = String::from_utf8_lossy(&self.input[start..self.pos]);
        Event::Text(decode_entities(&raw))
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Event;

    fn next(&mut self) -> Option<Event> {
        if let Some(event) = self.pending.take() {
            return Some(event);
        }

        loop {
            if self.pos >= self.input.len() {
                return None;
            }

            if self.peek() != Some(b'<') {
                return Some(self.read_text());
            }

            match self.peek_at(1) {
                // comment or declaration
                Some(b'!') => {
                    if self.input[self.pos..].starts_with(b"<!--") {
                        self.pos += 4;
                        self.skip_until(b"-->");
                    } else {
                        self.pos += 2;
                        self.skip_until(b">");
                    }
                }
                // processing instruction
                Some(b'?') => {
                    self.pos += 2;
                    self.skip_until(b">");
                }
                Some(b) if b.is_ascii_alphabetic() || b == b'/' => {
                    self.pos += 1;
                    let (event, queued) = self.read_tag();
                    self.pending = queued;
                    return Some(event);
                }
                // a lone '<' is character data
                _ => {
                    self.bump();
                    return Some(Event::Text("<".to_string()));
                }
            }
        }
    }
}

/// Minimal entity decoding for the READER pages
fn decode_entities(s: &str) -> String {
    if !s.contains('&') {
        return s.to_string();
    }
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
