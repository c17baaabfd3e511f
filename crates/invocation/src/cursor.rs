/// Whitespace-delimited token cursor over the raw input of one command.
///
/// Peeking never moves the cursor; parsers call [`read_token`](Self::read_token)
/// only once they have accepted the peeked token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputCursor<'a> {
	input: &'a str,
	offset: usize,
	consumed: usize,
}

impl<'a> InputCursor<'a> {
	/// Creates a cursor at the start of `input`.
	pub fn new(input: &'a str) -> Self {
		Self {
			input,
			offset: 0,
			consumed: 0,
		}
	}

	/// Returns the next token without consuming it. Empty when exhausted.
	pub fn peek_token(&self) -> &'a str {
		let (start, end) = self.next_span();
		&self.input[start..end]
	}

	/// Consumes and returns the next token. Empty when exhausted.
	pub fn read_token(&mut self) -> &'a str {
		let (start, end) = self.next_span();
		if start == end {
			self.offset = end;
			return "";
		}
		self.offset = end;
		self.consumed += 1;
		&self.input[start..end]
	}

	/// Returns the unconsumed input, leading whitespace included.
	pub fn remaining(&self) -> &'a str {
		&self.input[self.offset..]
	}

	/// Returns true if no tokens are left.
	pub fn is_exhausted(&self) -> bool {
		self.peek_token().is_empty()
	}

	/// Number of tokens consumed so far.
	pub fn consumed(&self) -> usize {
		self.consumed
	}

	/// Byte offset of the cursor into the original input.
	pub fn offset(&self) -> usize {
		self.offset
	}

	fn next_span(&self) -> (usize, usize) {
		let rest = &self.input[self.offset..];
		let start = self.offset + (rest.len() - rest.trim_start().len());
		let end = self.input[start..].find(char::is_whitespace).map_or(self.input.len(), |len| start + len);
		(start, end)
	}
}
