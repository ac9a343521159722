// Line reader with universal newlines
//
// A line ends at "\r\n", "\n" or a lone "\r". The terminator is kept apart
// from the text so callers can either drop it or copy it through unchanged.

use std::io::{self, BufRead};

/// One input line and the terminator that ended it ("" at end of input).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub ending: &'static str,
}

/// Iterator over the [`Line`]s of a reader.
///
/// Invalid UTF-8 yields an [`io::ErrorKind::InvalidData`] error.
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_line(&mut self) -> io::Result<Option<Line>> {
        let mut bytes = Vec::new();
        loop {
            let (used, terminator) = {
                let available = match self.reader.fill_buf() {
                    Ok(buf) => buf,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                };
                if available.is_empty() {
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    return finish(bytes, "").map(Some);
                }
                match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                    Some(i) => {
                        bytes.extend_from_slice(&available[..i]);
                        (i + 1, Some(available[i]))
                    }
                    None => {
                        bytes.extend_from_slice(available);
                        (available.len(), None)
                    }
                }
            };
            self.reader.consume(used);

            match terminator {
                Some(b'\n') => return finish(bytes, "\n").map(Some),
                Some(_) => {
                    if self.peek_byte()? == Some(b'\n') {
                        self.reader.consume(1);
                        return finish(bytes, "\r\n").map(Some);
                    }
                    return finish(bytes, "\r").map(Some);
                }
                None => {}
            }
        }
    }
}

fn finish(bytes: Vec<u8>, ending: &'static str) -> io::Result<Line> {
    let text =
        String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(Line { text, ending })
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<Line>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_line().transpose()
    }
}
