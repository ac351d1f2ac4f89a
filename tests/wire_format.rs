//! Wire-level integration tests: exact byte layouts, decompression,
//! malformed-input rejection, and full-message round trips.

use filum_dns::edns::{EdnsOption, Opt};
use filum_dns::name::NameParser;
use filum_dns::rdata::{self, RData};
use filum_dns::record::ResourceRecord;
use filum_dns::{
    Class, Error, Header, HeaderFlags, Message, Name, Question, RecordClass, RecordType, Type,
};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

fn name(s: &str) -> Name {
    Name::from_str(s).unwrap()
}

/// A minimal query encodes to the canonical 29-byte sequence.
#[test]
fn minimal_query_exact_bytes() {
    let mut msg = Message::new(Header::new(0x1234));
    msg.header_mut().set_recursion_desired(true);
    msg.add_question(Question::a(name("example.com.")));

    let wire = msg.to_wire();

    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x12, 0x34, // id
        0x01, 0x00, // flags: RD
        0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // counts
        7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0,
        0x00, 0x01, // qtype A
        0x00, 0x01, // qclass IN
    ];

    assert_eq!(wire.as_ref(), expected);
    assert_eq!(wire.len(), 29);
}

/// Unpacking a name through a compression pointer yields the suffix
/// from the pointer target.
#[test]
fn compressed_name_decode() {
    let wire = [
        3, b'f', b'o', b'o', 3, b'b', b'a', b'r', 0, // offsets 0..9
        0xC0, 0x00, // offset 9: pointer to 0
    ];

    let parser = NameParser::new(&wire);
    let (parsed, consumed) = parser.parse_name(9).unwrap();
    assert_eq!(parsed.to_string(), "foo.bar.");
    assert_eq!(consumed, 2);
}

/// Mutually referencing pointers are rejected via the dereference cap.
#[test]
fn pointer_loop_rejected() {
    let wire = [0xC0, 0x02, 0xC0, 0x00];
    let parser = NameParser::new(&wire);
    assert!(matches!(
        parser.parse_name(0),
        Err(Error::TooManyCompressionJumps { .. })
    ));
}

/// Reserved label types (top bits 01 / 10) fail the decode.
#[test]
fn reserved_label_bits_rejected() {
    for byte in [0x40u8, 0x80] {
        let wire = [3, b'f', b'o', b'o', byte, b'x', 0];
        let parser = NameParser::new(&wire);
        assert!(matches!(
            parser.parse_name(0),
            Err(Error::ReservedLabelType { .. })
        ));
    }
}

/// An A record whose rdlength is not 4 must not read 4 bytes.
#[test]
fn a_record_rdlength_enforced() {
    let mut wire = Vec::new();
    wire.extend_from_slice(&[1, b'a', 0]); // name "a."
    wire.extend_from_slice(&1u16.to_be_bytes()); // type A
    wire.extend_from_slice(&1u16.to_be_bytes()); // class IN
    wire.extend_from_slice(&60u32.to_be_bytes()); // ttl
    wire.extend_from_slice(&3u16.to_be_bytes()); // rdlength 3 (wrong)
    wire.extend_from_slice(&[192, 0, 2, 1]); // 4 payload bytes present

    assert!(ResourceRecord::parse(&wire, 0).is_err());
}

/// A single-answer message has a computable byte-exact encoding and
/// round-trips to an equal message.
#[test]
fn single_answer_exact_bytes_and_roundtrip() {
    let mut msg = Message::new(Header::new(0));
    msg.add_answer(ResourceRecord::a(name("a."), 60, Ipv4Addr::new(192, 0, 2, 1)));

    let wire = msg.to_wire();

    #[rustfmt::skip]
    let expected: &[u8] = &[
        0x00, 0x00, 0x00, 0x00, // id, flags
        0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, // counts: 1 answer
        1, b'a', 0, // owner name
        0x00, 0x01, // type A
        0x00, 0x01, // class IN
        0x00, 0x00, 0x00, 0x3C, // ttl 60
        0x00, 0x04, // rdlength
        192, 0, 2, 1, // rdata
    ];

    assert_eq!(wire.as_ref(), expected);

    let parsed = Message::parse(&wire).unwrap();
    assert_eq!(parsed, msg);
}

/// The flag word is big-endian at offsets 2-3 and the counts occupy
/// bytes 4-11.
#[test]
fn header_byte_placement() {
    let mut header = Header::new(0xABCD);
    header.flags = HeaderFlags::QR | HeaderFlags::AA | HeaderFlags::RD;
    let mut msg = Message::new(header);
    msg.add_question(Question::a(name("x.")));

    let wire = msg.to_wire();
    let flags = 0x8000u16 | 0x0400 | 0x0100;
    assert_eq!(wire[2], (flags >> 8) as u8);
    assert_eq!(wire[3], (flags & 0xFF) as u8);
    assert_eq!(u16::from_be_bytes([wire[4], wire[5]]), 1);
}

/// A message carrying every implemented record type survives a
/// decode/encode round trip.
#[test]
fn all_record_types_roundtrip() {
    let mut msg = Message::new(Header::new(7));
    msg.header_mut().set_response(true);
    msg.add_question(Question::new(
        name("example.com."),
        RecordType::ANY,
        RecordClass::IN,
    ));

    let records = [
        RData::A(rdata::A::new(Ipv4Addr::new(192, 0, 2, 1))),
        RData::AAAA(rdata::AAAA::new(Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1))),
        RData::NS(rdata::NS::new(name("ns1.example.com."))),
        RData::CNAME(rdata::CNAME::new(name("www.example.com."))),
        RData::PTR(rdata::PTR::new(name("host.example.com."))),
        RData::MB(rdata::MB::new(name("mb.example.com."))),
        RData::MG(rdata::MG::new(name("mg.example.com."))),
        RData::MR(rdata::MR::new(name("mr.example.com."))),
        RData::MX(rdata::MX::new(10, name("mail.example.com."))),
        RData::SOA(rdata::SOA::new(
            name("ns1.example.com."),
            name("hostmaster.example.com."),
            2024010101,
            3600,
            900,
            604800,
            86400,
        )),
        RData::TXT(rdata::TXT::new(["v=spf1 -all"])),
        RData::HINFO(rdata::HINFO::new("AMD64", "Linux")),
        RData::MINFO(rdata::MINFO::new(
            name("admin.example.com."),
            name("errors.example.com."),
        )),
        RData::SRV(rdata::SRV::new(10, 60, 5060, name("sip.example.com."))),
        RData::NAPTR(rdata::NAPTR::new(
            100,
            10,
            "u",
            "E2U+sip",
            "!^.*$!sip:info@example.com!",
            Name::root(),
        )),
        RData::LOC(rdata::LOC::default()),
        RData::DS(rdata::DS::new(60485, 5, 1, vec![0x2B; 20])),
        RData::DNSKEY(rdata::DNSKEY::new(257, 3, 8, vec![0x03; 32])),
        RData::RRSIG(rdata::RRSIG::new(
            1,
            8,
            2,
            3600,
            1_700_000_000,
            1_690_000_000,
            60485,
            name("example.com."),
            vec![0xAB; 64],
        )),
        RData::NSEC(rdata::NSEC::with_types(name("b.example.com."), &[1, 2, 15, 46])),
        RData::NSEC3(rdata::NSEC3::new(
            1,
            1,
            12,
            vec![0xAA, 0xBB],
            vec![0x01; 20],
            rdata::dnssec::bitmap_from_types(&[1, 28]),
        )),
        RData::NSEC3PARAM(rdata::NSEC3PARAM::new(1, 0, 12, vec![0xAA, 0xBB])),
    ];

    for rd in records {
        let rtype = rd.record_type();
        msg.add_answer(ResourceRecord::new(
            name("example.com."),
            rtype,
            Class::Known(RecordClass::IN),
            300,
            rd,
        ));
    }

    // Unknown type in the authority section.
    msg.add_authority(ResourceRecord::new(
        name("example.com."),
        Type::Unknown(65280),
        Class::Known(RecordClass::IN),
        60,
        RData::Unknown(rdata::Unknown::new(65280, vec![0xDE, 0xAD])),
    ));

    // OPT pseudo-RR in the additional section; the class carries the
    // advertised UDP payload size.
    msg.add_additional(ResourceRecord::new(
        Name::root(),
        Type::Known(RecordType::OPT),
        Class::from_u16(4096),
        0,
        RData::Opt(Opt::from_options([
            EdnsOption::new(10, vec![1, 2, 3, 4, 5, 6, 7, 8]),
            EdnsOption::new(3, b"resolver-1".to_vec()),
        ])),
    ));

    let wire = msg.to_wire();
    let parsed = Message::parse(&wire).unwrap();
    assert_eq!(parsed, msg);

    // Re-encoding the parsed message is byte-identical.
    assert_eq!(parsed.to_wire(), wire);

    // The OPT options all survived.
    let opt = parsed.opt_record().unwrap();
    match opt.rdata() {
        RData::Opt(o) => assert_eq!(o.options().len(), 2),
        other => panic!("expected OPT rdata, got {other}"),
    }
}

/// Record equality ignores owner-name case after a round trip.
#[test]
fn roundtrip_name_case_insensitive() {
    let mut msg = Message::new(Header::new(1));
    msg.add_question(Question::a(name("EXAMPLE.COM.")));

    let parsed = Message::parse(&msg.to_wire()).unwrap();
    assert_eq!(parsed.question().unwrap().qname, name("example.com."));
}

/// Every truncation of a valid message fails cleanly or parses; no
/// panics, no reads past the buffer.
#[test]
fn truncation_sweep_is_panic_free() {
    let mut msg = Message::new(Header::new(99));
    msg.add_question(Question::a(name("www.example.com.")));
    msg.add_answer(ResourceRecord::cname(
        name("www.example.com."),
        300,
        name("example.com."),
    ));
    msg.add_answer(ResourceRecord::a(
        name("example.com."),
        300,
        Ipv4Addr::new(192, 0, 2, 7),
    ));

    let wire = msg.to_wire();
    for len in 0..wire.len() {
        // Shorter buffers must fail: records are declared but missing.
        assert!(Message::parse(&wire[..len]).is_err(), "length {len}");
    }
    assert!(Message::parse(&wire).is_ok());
}

/// Arbitrary byte soup either parses or fails; it never panics.
#[test]
fn byte_soup_is_panic_free() {
    // Deterministic xorshift so the corpus is stable.
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };

    for round in 0..512usize {
        let len = (next() % 96) as usize;
        let mut buf = vec![0u8; len];
        for byte in &mut buf {
            *byte = (next() & 0xFF) as u8;
        }
        // Keep the declared counts small so malformed sections are hit
        // quickly rather than spending the round allocating.
        if len >= 12 {
            for idx in [4, 6, 8, 10] {
                buf[idx] = 0;
                buf[idx + 1] &= 0x03;
            }
        }
        let _ = Message::parse(&buf);

        let parser = NameParser::new(&buf);
        let _ = parser.parse_name(round % len.max(1));
    }
}

/// Compression pointers in record payloads resolve against the whole
/// message, as emitted by real servers.
#[test]
fn compressed_rdata_names_resolve() {
    // Hand-built response: question example.com A, answer CNAME whose
    // target compresses to the question name.
    let mut wire = Vec::new();
    wire.extend_from_slice(&[0x00, 0x07, 0x80, 0x00]); // id 7, QR
    wire.extend_from_slice(&[0, 1, 0, 1, 0, 0, 0, 0]); // 1 question, 1 answer
    let qname_offset = wire.len();
    wire.extend_from_slice(&[7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0]);
    wire.extend_from_slice(&[0, 1, 0, 1]); // A IN

    // Answer: www.example.com CNAME -> pointer to qname.
    wire.extend_from_slice(&[3, b'w', b'w', b'w']);
    wire.extend_from_slice(&[0xC0, qname_offset as u8]);
    wire.extend_from_slice(&[0, 5, 0, 1]); // CNAME IN
    wire.extend_from_slice(&60u32.to_be_bytes());
    wire.extend_from_slice(&[0, 2]); // rdlength: one pointer
    wire.extend_from_slice(&[0xC0, qname_offset as u8]);

    let msg = Message::parse(&wire).unwrap();
    assert_eq!(msg.answers().len(), 1);

    let answer = &msg.answers()[0];
    assert_eq!(answer.name().to_string(), "www.example.com.");
    assert_eq!(
        answer.rdata().as_cname().unwrap().to_string(),
        "example.com."
    );
}

/// The bounded encoder refuses messages over the 4096-byte default.
#[test]
fn pack_respects_default_limit() {
    let mut msg = Message::new(Header::new(3));
    msg.add_question(Question::a(name("example.com.")));
    assert!(msg.pack().is_ok());

    for i in 0..120 {
        msg.add_answer(ResourceRecord::txt(
            name(&format!("n{i}.example.com.")),
            60,
            vec![b'x'; 100],
        ));
    }
    assert!(matches!(msg.pack(), Err(Error::MessageTooLarge { .. })));
}
