//! Single-pass scanner over named-group pattern source.
//!
//! Copies the source into the native pattern, replacing each named-group
//! introducer (`(?<name>` or `(?P<name>`) with a plain `(`. Capture numbering
//! follows the engine: every `(` not followed by `?` opens a capturing group,
//! and so does every named introducer. All other `(?` forms (non-capturing,
//! flag groups, lookaround) are copied verbatim and not counted.
//!
//! Escapes and character classes are tracked so that literal parentheses
//! never affect nesting or numbering. So is the `x` (verbose) flag: while it
//! is on, `#` starts a comment running to the end of the line, and whitespace
//! may separate a `(` from the `?` that follows it. A `(?x)` lasts until its
//! enclosing group closes; `(?x:...)` covers only its own body.

use indexmap::IndexMap;
use regroup_core::GroupOccurrence;

use crate::error::PatternSyntaxError;

/// Output of a successful scan.
pub(crate) struct Scan {
    pub native: String,
    pub groups: IndexMap<String, Vec<GroupOccurrence>>,
    pub group_count: usize,
}

struct OpenGroup {
    offset: usize,
    /// Verbose state to restore when the group closes.
    verbose: bool,
}

pub(crate) struct Scanner<'s> {
    source: &'s str,
    bytes: &'s [u8],
    pos: usize,
    /// Start of the source range not yet copied into `native`.
    copied: usize,
    native: String,
    /// Unclosed groups, innermost last.
    open: Vec<OpenGroup>,
    /// Whether the `x` flag is in effect at `pos`.
    verbose: bool,
    class_depth: usize,
    class_start: usize,
    group_count: usize,
    groups: IndexMap<String, Vec<GroupOccurrence>>,
}

impl<'s> Scanner<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
            copied: 0,
            native: String::with_capacity(source.len()),
            open: Vec::new(),
            verbose: false,
            class_depth: 0,
            class_start: 0,
            group_count: 0,
            groups: IndexMap::new(),
        }
    }

    pub fn run(mut self) -> Result<Scan, PatternSyntaxError> {
        while let Some(b) = self.peek(0) {
            if self.class_depth > 0 {
                self.scan_in_class(b);
                continue;
            }
            match b {
                b'\\' => self.skip_escape(),
                b'#' if self.verbose => self.skip_comment(),
                b'[' => self.open_class(),
                b'(' => self.open_group()?,
                b')' => self.close_group()?,
                _ => self.pos += 1,
            }
        }

        if self.class_depth > 0 {
            return Err(PatternSyntaxError::UnterminatedClass {
                offset: self.class_start,
            });
        }
        if let Some(group) = self.open.last() {
            return Err(PatternSyntaxError::UnterminatedGroup {
                offset: group.offset,
            });
        }

        self.native.push_str(&self.source[self.copied..]);
        Ok(Scan {
            native: self.native,
            groups: self.groups,
            group_count: self.group_count,
        })
    }

    fn peek(&self, ahead: usize) -> Option<u8> {
        self.bytes.get(self.pos + ahead).copied()
    }

    /// Skip a backslash and the byte it escapes.
    ///
    /// A trailing backslash is left for the engine to reject. A multi-byte
    /// escaped character leaves `pos` inside it, which is harmless since UTF-8
    /// continuation bytes never equal an ASCII delimiter.
    fn skip_escape(&mut self) {
        self.pos = (self.pos + 2).min(self.bytes.len());
    }

    /// Skip a `#` comment through its terminating newline.
    fn skip_comment(&mut self) {
        self.pos = match self.bytes[self.pos..].iter().position(|&b| b == b'\n') {
            Some(newline) => self.pos + newline + 1,
            None => self.bytes.len(),
        };
    }

    /// Skip whitespace and comments, in verbose mode only.
    fn skip_space(&mut self) {
        if !self.verbose {
            return;
        }
        while let Some(ch) = self.source.get(self.pos..).and_then(|rest| rest.chars().next()) {
            if ch == '#' {
                self.skip_comment();
            } else if ch.is_whitespace() {
                self.pos += ch.len_utf8();
            } else {
                break;
            }
        }
    }

    fn open_class(&mut self) {
        if self.class_depth == 0 {
            self.class_start = self.pos;
        }
        self.class_depth += 1;
        self.pos += 1;
        self.skip_space();

        // `]` right after `[` or `[^` is a literal member.
        if self.peek(0) == Some(b'^') {
            self.pos += 1;
            self.skip_space();
        }
        if self.peek(0) == Some(b']') {
            self.pos += 1;
        }
    }

    fn scan_in_class(&mut self, b: u8) {
        match b {
            b'\\' => self.skip_escape(),
            b'#' if self.verbose => self.skip_comment(),
            b'[' => self.open_class(),
            b']' => {
                self.class_depth -= 1;
                self.pos += 1;
            }
            _ => self.pos += 1,
        }
    }

    fn open_group(&mut self) -> Result<(), PatternSyntaxError> {
        let offset = self.pos;
        self.pos += 1;
        self.skip_space();

        if self.peek(0) != Some(b'?') {
            self.push_group(offset);
            self.group_count += 1;
            return Ok(());
        }

        let name_start = match (self.peek(1), self.peek(2)) {
            (Some(b'<'), Some(b'=' | b'!')) => None,
            (Some(b'<'), _) => Some(self.pos + 2),
            (Some(b'P'), Some(b'<')) => Some(self.pos + 3),
            _ => None,
        };
        if let Some(start) = name_start {
            self.push_group(offset);
            return self.named_group(offset, start);
        }

        self.pos += 1;
        match self.flags() {
            // `(?flags)` is complete on its own and sets flags for the rest
            // of the enclosing group.
            Some((verbose, b')', len)) => {
                self.pos += len + 1;
                if let Some(verbose) = verbose {
                    self.verbose = verbose;
                }
            }
            Some((verbose, _, len)) => {
                self.push_group(offset);
                self.pos += len + 1;
                if let Some(verbose) = verbose {
                    self.verbose = verbose;
                }
            }
            // Lookaround, backreference or a malformed group: the engine
            // decides, the scanner only keeps nesting.
            None => self.push_group(offset),
        }
        Ok(())
    }

    fn push_group(&mut self, offset: usize) {
        self.open.push(OpenGroup {
            offset,
            verbose: self.verbose,
        });
    }

    /// Read the flag letters at `pos`, up to the `:` or `)` ending them.
    ///
    /// Returns the `x` setting they carry (if any), the terminator and the
    /// length of the letters.
    fn flags(&self) -> Option<(Option<bool>, u8, usize)> {
        let mut verbose = None;
        let mut negated = false;
        for (len, &b) in self.bytes[self.pos..].iter().enumerate() {
            match b {
                b':' | b')' => return Some((verbose, b, len)),
                b'-' => negated = true,
                b'x' => verbose = Some(!negated),
                b'i' | b'm' | b's' | b'U' | b'u' | b'R' => {}
                _ => return None,
            }
        }
        None
    }

    fn named_group(&mut self, offset: usize, name_start: usize) -> Result<(), PatternSyntaxError> {
        let rest = &self.source[name_start..];
        let Some(len) = rest.find('>') else {
            return Err(PatternSyntaxError::MalformedGroupName { offset });
        };
        let name = &rest[..len];
        validate_name(name, name_start, offset)?;

        self.group_count += 1;
        self.groups
            .entry(name.to_owned())
            .or_default()
            .push(GroupOccurrence::new(self.group_count, offset));

        // Flush through the `(` itself and drop the introducer.
        self.native.push_str(&self.source[self.copied..=offset]);
        self.pos = name_start + len + 1;
        self.copied = self.pos;
        Ok(())
    }

    fn close_group(&mut self) -> Result<(), PatternSyntaxError> {
        let Some(group) = self.open.pop() else {
            return Err(PatternSyntaxError::UnopenedGroup { offset: self.pos });
        };
        self.verbose = group.verbose;
        self.pos += 1;
        Ok(())
    }
}

fn validate_name(name: &str, name_start: usize, offset: usize) -> Result<(), PatternSyntaxError> {
    let mut chars = name.char_indices();
    let Some((_, first)) = chars.next() else {
        return Err(PatternSyntaxError::MalformedGroupName { offset });
    };

    if !(first.is_ascii_alphabetic() || first == '_') {
        return Err(PatternSyntaxError::InvalidGroupNameCharacter {
            offset: name_start,
            ch: first,
        });
    }

    for (i, ch) in chars {
        if !(ch.is_ascii_alphanumeric() || ch == '_') {
            return Err(PatternSyntaxError::InvalidGroupNameCharacter {
                offset: name_start + i,
                ch,
            });
        }
    }

    Ok(())
}
