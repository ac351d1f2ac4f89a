//! DNS message representation.
//!
//! A message is the 12-byte header plus four ordered sections:
//! questions, answers, authority records, and additional records
//! (where the EDNS OPT pseudo-RR lives).

use crate::DEFAULT_MESSAGE_SIZE;
use crate::error::{Error, Result};
use crate::header::{HEADER_SIZE, Header};
use crate::question::{Question, QuestionParser};
use crate::record::{RecordParser, ResourceRecord};
use crate::rtype::RecordType;
use bytes::{Bytes, BytesMut};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A complete DNS message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// The message header.
    header: Header,
    /// The question section.
    questions: Vec<Question>,
    /// The answer section.
    answers: Vec<ResourceRecord>,
    /// The authority section.
    authority: Vec<ResourceRecord>,
    /// The additional section.
    additional: Vec<ResourceRecord>,
}

impl Message {
    /// Creates a new empty message with the given header.
    pub fn new(header: Header) -> Self {
        Self {
            header,
            questions: Vec::new(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Creates a query message with a random ID and recursion desired.
    pub fn query(question: Question) -> Self {
        let mut header = Header::query();
        header.qd_count = 1;

        Self {
            header,
            questions: vec![question],
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    /// Creates a response message from a query, echoing its ID,
    /// opcode, RD flag, and question section.
    pub fn response_from(query: &Message) -> Self {
        let mut header = Header::response_from(&query.header);
        header.qd_count = query.questions.len() as u16;

        Self {
            header,
            questions: query.questions.clone(),
            answers: Vec::new(),
            authority: Vec::new(),
            additional: Vec::new(),
        }
    }

    // =========================================================================
    // Header accessors
    // =========================================================================

    /// Returns the message header.
    #[inline]
    pub fn header(&self) -> &Header {
        &self.header
    }

    /// Returns a mutable reference to the header.
    #[inline]
    pub fn header_mut(&mut self) -> &mut Header {
        &mut self.header
    }

    /// Returns the message ID.
    #[inline]
    pub fn id(&self) -> u16 {
        self.header.id
    }

    /// Sets the message ID.
    #[inline]
    pub fn set_id(&mut self, id: u16) {
        self.header.id = id;
    }

    /// Returns true if this is a query.
    #[inline]
    pub fn is_query(&self) -> bool {
        self.header.is_query()
    }

    /// Returns true if this is a response.
    #[inline]
    pub fn is_response(&self) -> bool {
        self.header.is_response()
    }

    /// Returns true if the message was truncated.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        self.header.is_truncated()
    }

    // =========================================================================
    // Section accessors
    // =========================================================================

    /// Returns the question section.
    #[inline]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Returns the first question if present.
    #[inline]
    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }

    /// Returns the answer section.
    #[inline]
    pub fn answers(&self) -> &[ResourceRecord] {
        &self.answers
    }

    /// Returns the authority section.
    #[inline]
    pub fn authority(&self) -> &[ResourceRecord] {
        &self.authority
    }

    /// Returns the additional section.
    #[inline]
    pub fn additional(&self) -> &[ResourceRecord] {
        &self.additional
    }

    /// Returns the OPT pseudo-RR from the additional section, if any.
    pub fn opt_record(&self) -> Option<&ResourceRecord> {
        self.additional
            .iter()
            .find(|r| r.record_type() == Some(RecordType::OPT))
    }

    // =========================================================================
    // Section mutators (keep the header counts in sync)
    // =========================================================================

    /// Adds a question.
    pub fn add_question(&mut self, question: Question) {
        self.questions.push(question);
        self.header.qd_count = self.questions.len() as u16;
    }

    /// Adds an answer record.
    pub fn add_answer(&mut self, record: ResourceRecord) {
        self.answers.push(record);
        self.header.an_count = self.answers.len() as u16;
    }

    /// Adds an authority record.
    pub fn add_authority(&mut self, record: ResourceRecord) {
        self.authority.push(record);
        self.header.ns_count = self.authority.len() as u16;
    }

    /// Adds an additional record.
    pub fn add_additional(&mut self, record: ResourceRecord) {
        self.additional.push(record);
        self.header.ar_count = self.additional.len() as u16;
    }

    // =========================================================================
    // Wire format
    // =========================================================================

    /// Parses a DNS message from wire format.
    ///
    /// All records declared by the header counts must parse; trailing
    /// bytes after the last declared record are logged and tolerated,
    /// preserving compatibility with padded UDP responses.
    pub fn parse(data: &[u8]) -> Result<Self> {
        let header = Header::parse(data)?;

        let mut questions = Vec::with_capacity(header.qd_count as usize);
        let mut answers = Vec::with_capacity(header.an_count as usize);
        let mut authority = Vec::with_capacity(header.ns_count as usize);
        let mut additional = Vec::with_capacity(header.ar_count as usize);

        let mut offset = HEADER_SIZE;

        let mut q_parser = QuestionParser::new(data, offset, header.qd_count);
        while let Some(q) = q_parser.next()? {
            questions.push(q);
        }
        offset = q_parser.offset();

        let mut an_parser = RecordParser::new(data, offset, header.an_count);
        while let Some(r) = an_parser.next()? {
            answers.push(r);
        }
        offset = an_parser.offset();

        let mut ns_parser = RecordParser::new(data, offset, header.ns_count);
        while let Some(r) = ns_parser.next()? {
            authority.push(r);
        }
        offset = ns_parser.offset();

        let mut ar_parser = RecordParser::new(data, offset, header.ar_count);
        while let Some(r) = ar_parser.next()? {
            additional.push(r);
        }
        offset = ar_parser.offset();

        if offset != data.len() {
            debug!(
                consumed = offset,
                length = data.len(),
                "trailing bytes in DNS message"
            );
        }

        Ok(Self {
            header,
            questions,
            answers,
            authority,
            additional,
        })
    }

    /// Returns the wire format length of this message.
    pub fn wire_len(&self) -> usize {
        let mut len = HEADER_SIZE;

        for q in &self.questions {
            len += q.wire_len();
        }
        for r in &self.answers {
            len += r.wire_len();
        }
        for r in &self.authority {
            len += r.wire_len();
        }
        for r in &self.additional {
            len += r.wire_len();
        }

        len
    }

    /// Writes the message to wire format.
    ///
    /// The header's section counts are recomputed from the section
    /// lengths before writing, so they always match the encoded
    /// sections.
    pub fn write_to(&self, buf: &mut BytesMut) {
        let mut header = self.header.clone();
        header.qd_count = self.questions.len() as u16;
        header.an_count = self.answers.len() as u16;
        header.ns_count = self.authority.len() as u16;
        header.ar_count = self.additional.len() as u16;

        header.write_to(buf);

        for q in &self.questions {
            q.write_to(buf);
        }
        for r in &self.answers {
            r.write_to(buf);
        }
        for r in &self.authority {
            r.write_to(buf);
        }
        for r in &self.additional {
            r.write_to(buf);
        }
    }

    /// Converts the message to wire format, growing the buffer as
    /// needed (suitable for TCP-sized messages).
    pub fn to_wire(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(self.wire_len());
        self.write_to(&mut buf);
        buf.freeze()
    }

    /// Converts the message to wire format, bounded by the default
    /// 4096-byte encode buffer.
    ///
    /// Fails with [`Error::MessageTooLarge`] if the encoding does not
    /// fit.
    pub fn pack(&self) -> Result<Bytes> {
        let size = self.wire_len();
        if size > DEFAULT_MESSAGE_SIZE {
            return Err(Error::MessageTooLarge {
                size,
                max_size: DEFAULT_MESSAGE_SIZE,
            });
        }
        Ok(self.to_wire())
    }

    /// Truncates the message to fit within `max_size` encoded bytes.
    ///
    /// Removes records from the additional, authority, and answer
    /// sections in that order, and sets the TC flag if anything was
    /// dropped.
    pub fn truncate_to(&mut self, max_size: usize) {
        let mut dropped = false;

        while self.wire_len() > max_size {
            if self.additional.pop().is_some()
                || self.authority.pop().is_some()
                || self.answers.pop().is_some()
            {
                dropped = true;
                continue;
            }
            break;
        }

        if dropped {
            self.header.set_truncated(true);
        }

        self.header.an_count = self.answers.len() as u16;
        self.header.ns_count = self.authority.len() as u16;
        self.header.ar_count = self.additional.len() as u16;
    }
}

impl Default for Message {
    fn default() -> Self {
        Self::new(Header::default())
    }
}

impl fmt::Display for Message {
    /// Renders a dig-like summary: the header lines, per-section
    /// counts, and each non-empty section.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.header)?;
        writeln!(
            f,
            "QUERY: {}, ANSWER: {}, AUTHORITY: {}, ADDITIONAL: {}",
            self.questions.len(),
            self.answers.len(),
            self.authority.len(),
            self.additional.len()
        )?;

        if !self.questions.is_empty() {
            writeln!(f, "\n;; QUESTION SECTION:")?;
            for q in &self.questions {
                writeln!(f, ";{q}")?;
            }
        }

        if !self.answers.is_empty() {
            writeln!(f, "\n;; ANSWER SECTION:")?;
            for r in &self.answers {
                writeln!(f, "{r}")?;
            }
        }

        if !self.authority.is_empty() {
            writeln!(f, "\n;; AUTHORITY SECTION:")?;
            for r in &self.authority {
                writeln!(f, "{r}")?;
            }
        }

        if !self.additional.is_empty() {
            writeln!(f, "\n;; ADDITIONAL SECTION:")?;
            for r in &self.additional {
                writeln!(f, "{r}")?;
            }
        }

        Ok(())
    }
}
