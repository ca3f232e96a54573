/// Output line rendering.
///
/// Writes each line directly to a `Write` sink — no intermediate `String`
/// allocation per line. Uses `ryu` for amounts (shortest round-trip
/// rendering, so the textual value parses back to the exact sampled float).
use std::io::{self, Write};

/// Currency code declared on the first line and suffixed to every amount.
pub const CURRENCY: &str = "czk";

/// Write the `def currency` declaration that opens every generated file.
pub fn write_currency_decl<W: Write>(w: &mut W) -> io::Result<()> {
    writeln!(w, "def currency {CURRENCY}")
}

/// Write one `def person <id>` declaration.
pub fn write_person_decl<W: Write>(w: &mut W, id: &str) -> io::Result<()> {
    writeln!(w, "def person {id}")
}

/// Write one `<payer> paid <amount>czk for <payee>` line.
pub fn write_transaction<W: Write>(
    w: &mut W,
    payer: &str,
    amount: f64,
    payee: &str,
) -> io::Result<()> {
    let mut buf = ryu::Buffer::new();
    write!(w, "{payer} paid ")?;
    w.write_all(buf.format(amount).as_bytes())?;
    writeln!(w, "{CURRENCY} for {payee}")
}
