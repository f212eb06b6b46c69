//! Hand-assembled FlatBuffers-layout buffers for tests.
//!
//! [`build`] lays out a vtable at 0, then one table whose field `i` is a
//! `uoffset` at field offset `4 + 4 * i` (vtable slot `4 + 2 * i`), then the
//! vectors and strings the fields point to. Building a fixture also turns on
//! test logging.

#![allow(dead_code)]

use flatview_table::{Table, TableOptions};

pub enum Field {
    /// Marked absent in the vtable.
    Absent,
    /// A vector with an explicit length prefix followed by raw element bytes.
    Raw { len: u32, bytes: Vec<u8> },
    /// A vector of offsets to string records.
    Strings(Vec<Vec<u8>>),
}

pub fn ints(values: &[i32]) -> Field {
    Field::Raw {
        len: values.len() as u32,
        bytes: values.iter().flat_map(|v| v.to_le_bytes()).collect(),
    }
}

pub fn raw(len: u32, bytes: impl Into<Vec<u8>>) -> Field {
    Field::Raw {
        len,
        bytes: bytes.into(),
    }
}

pub fn strings(values: &[&str]) -> Field {
    Field::Strings(values.iter().map(|s| s.as_bytes().to_vec()).collect())
}

pub fn field_offset(field: usize) -> usize {
    4 + 4 * field
}

pub fn vtable_slot(field: usize) -> usize {
    4 + 2 * field
}

pub struct Fixture {
    pub buf: Vec<u8>,
    pub pos: usize,
}

impl Fixture {
    pub fn table(&self) -> Table<'_> {
        Table::new(&self.buf, self.pos)
    }

    pub fn table_with(&self, options: TableOptions) -> Table<'_> {
        Table::with_options(&self.buf, self.pos, options)
    }
}

pub fn build(fields: &[Field]) -> Fixture {
    init_test_logging();
    let n = fields.len();
    let mut buf = Vec::new();

    push_u16(&mut buf, (4 + 2 * n) as u16);
    push_u16(&mut buf, (4 + 4 * n) as u16);
    for (i, field) in fields.iter().enumerate() {
        let offset = match field {
            Field::Absent => 0,
            _ => field_offset(i) as u16,
        };
        push_u16(&mut buf, offset);
    }
    align(&mut buf);

    let pos = buf.len();
    push_u32(&mut buf, pos as u32); // soffset back to the vtable at 0
    for _ in 0..n {
        push_u32(&mut buf, 0);
    }

    for (i, field) in fields.iter().enumerate() {
        let slot = pos + field_offset(i);
        match field {
            Field::Absent => {}
            Field::Raw { len, bytes } => {
                align(&mut buf);
                let vector = buf.len();
                patch_u32(&mut buf, slot, vector - slot);
                push_u32(&mut buf, *len);
                buf.extend_from_slice(bytes);
            }
            Field::Strings(values) => {
                align(&mut buf);
                let vector = buf.len();
                patch_u32(&mut buf, slot, vector - slot);
                push_u32(&mut buf, values.len() as u32);
                let first = buf.len();
                for _ in values {
                    push_u32(&mut buf, 0);
                }
                for (j, bytes) in values.iter().enumerate() {
                    align(&mut buf);
                    let element = first + 4 * j;
                    let record = buf.len();
                    patch_u32(&mut buf, element, record - element);
                    push_u32(&mut buf, bytes.len() as u32);
                    buf.extend_from_slice(bytes);
                    buf.push(0);
                }
            }
        }
    }

    Fixture { buf, pos }
}

fn push_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn push_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

fn patch_u32(buf: &mut [u8], at: usize, v: usize) {
    buf[at..at + 4].copy_from_slice(&(v as u32).to_le_bytes());
}

fn align(buf: &mut Vec<u8>) {
    while buf.len() % 4 != 0 {
        buf.push(0);
    }
}

/// Initialize a tracing subscriber that writes through the test harness.
///
/// Honors `RUST_LOG`; defaults to `trace` for the reader crates. [`build`]
/// calls this, so every test that assembles a fixture logs the same way.
pub fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, fmt};

    // Try to initialize, ignore error if already initialized
    let _ = fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("flatview_table=trace,flatview_values=trace")),
        )
        .with_test_writer()
        .try_init();
}
