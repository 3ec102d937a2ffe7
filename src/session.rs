//! Interactive read-validate-print loop.
//!
//! Owns the retry policy and all terminal formatting; the engine stays pure.
//! Generic over the line source and sink so full transcripts can be tested
//! against in-memory buffers.

use std::io::{self, BufRead, Write};

use crate::cipher;
use crate::grid::Grid;
use crate::key::Key;
use crate::plaintext::Plaintext;

/// Drives prompts, validation retries, and the encrypt/decrypt traces.
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Session { input, output }
    }

    /// Run message after message until the user declines another one.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            let plaintext = self.prompt_plaintext()?;
            let key = self.prompt_key()?;

            let ciphertext = self.encrypt_report(&plaintext, &key)?;

            if self.ask_yes_no("\nDo you want to decrypt the message?")? {
                self.decrypt_report(&ciphertext, &key)?;
            }

            if !self.ask_yes_no("\nDo you want to process another message?")? {
                writeln!(self.output, "Exiting program...")?;
                return Ok(());
            }
        }
    }

    /// One line with the terminator stripped. EOF is an error: a prompt must
    /// never spin on a closed input.
    fn read_line(&mut self) -> io::Result<String> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while a prompt was waiting",
            ));
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn prompt_plaintext(&mut self) -> io::Result<Plaintext> {
        loop {
            write!(self.output, "Enter plaintext (letters only): ")?;
            self.output.flush()?;
            let raw = self.read_line()?;
            match Plaintext::parse(&raw) {
                Ok(plaintext) => return Ok(plaintext),
                Err(e) => {
                    tracing::debug!(error = %e, "plaintext rejected");
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }
    }

    fn prompt_key(&mut self) -> io::Result<Key> {
        loop {
            write!(self.output, "Enter numeric key (digits only, e.g. 31425): ")?;
            self.output.flush()?;
            let raw = self.read_line()?;
            match Key::parse(raw.trim()) {
                Ok(key) => return Ok(key),
                Err(e) => {
                    tracing::debug!(error = %e, "key rejected");
                    writeln!(self.output, "Error: {}", e)?;
                }
            }
        }
    }

    fn ask_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            write!(self.output, "{} (yes/no): ", prompt)?;
            self.output.flush()?;
            let answer = self.read_line()?.trim().to_ascii_lowercase();
            match answer.as_str() {
                "yes" | "y" => return Ok(true),
                "no" | "n" => return Ok(false),
                _ => writeln!(self.output, "Invalid input. Please type yes or no.")?,
            }
        }
    }

    fn encrypt_report(&mut self, plaintext: &Plaintext, key: &Key) -> io::Result<String> {
        let grid = Grid::build(plaintext.as_str(), key.len());
        let ciphertext = cipher::read_by_key_order(&grid, key);
        tracing::info!(
            cols = key.len(),
            rows = grid.rows(),
            pt_len = plaintext.len(),
            "encrypted message"
        );

        writeln!(self.output)?;
        writeln!(self.output, "=== ENCRYPTION ===")?;
        writeln!(self.output, "PT = {}", plaintext)?;
        writeln!(self.output, "K  = {:?}  -> {} columns", key.digits(), key.len())?;
        writeln!(self.output, "Rows = {}", grid.rows())?;
        write!(self.output, "{}", grid.render(key))?;
        writeln!(self.output, "CT = {}", ciphertext)?;
        Ok(ciphertext)
    }

    fn decrypt_report(&mut self, ciphertext: &str, key: &Key) -> io::Result<String> {
        let rows = ciphertext.len().div_ceil(key.len());
        let groups = cipher::split_groups(ciphertext, key, rows);
        let grid = cipher::write_by_key_order(ciphertext, key, rows);
        let recovered = cipher::strip_padding(&grid.row_major()).to_string();
        tracing::info!(
            cols = key.len(),
            rows,
            recovered_len = recovered.len(),
            "decrypted message"
        );

        writeln!(self.output)?;
        writeln!(self.output, "=== DECRYPTION ===")?;
        writeln!(self.output, "CT = {}", ciphertext)?;
        writeln!(self.output, "K  = {:?}  -> {} columns", key.digits(), key.len())?;
        writeln!(self.output, "Rows = {}", rows)?;
        writeln!(self.output, "CT Division: {}", groups.join(" | "))?;
        write!(self.output, "{}", grid.render(key))?;
        writeln!(self.output, "PT = {}", recovered)?;
        Ok(recovered)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(script: &str) -> (io::Result<()>, String) {
        let mut out = Vec::new();
        let result = Session::new(Cursor::new(script.as_bytes()), &mut out).run();
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plaintext_retries_until_valid() {
        let (result, out) = run_session("\nabc123\nHELLO\n12\nno\nno\n");
        result.unwrap();
        assert!(out.contains("Error: Plaintext cannot be empty."));
        assert!(out.contains("Error: Plaintext must contain letters only (A-Z, a-z)."));
        assert!(out.contains("CT = "));
    }

    #[test]
    fn key_retries_report_each_kind() {
        let (result, out) = run_session("HELLO\n12a\n124\n113\n321\nno\nno\n");
        result.unwrap();
        assert!(out.contains("Error: Key must contain digits only (no letters or symbols)."));
        assert!(out.contains("Error: Each key digit must be in the range 1..3."));
        assert!(out.contains("Error: Duplicate digit '1' found in key. Key digits must be unique."));
    }

    #[test]
    fn yes_no_accepts_case_insensitive_single_letters() {
        let (result, out) = run_session("HI\n12\nY\nN\n");
        result.unwrap();
        assert!(out.contains("=== DECRYPTION ==="));
        assert!(out.contains("Exiting program..."));
    }

    #[test]
    fn yes_no_reprompts_on_anything_else() {
        let (result, out) = run_session("HI\n12\nmaybe\nno\nno\n");
        result.unwrap();
        assert!(out.contains("Invalid input. Please type yes or no."));
        assert!(!out.contains("=== DECRYPTION ==="));
    }

    #[test]
    fn eof_mid_prompt_is_an_error() {
        let (result, _) = run_session("HELLO\n");
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let (result, out) = run_session("HELLO\r\n21\r\nno\r\nno\r\n");
        result.unwrap();
        assert!(out.contains("PT = HELLO"));
        assert!(out.contains("Exiting program..."));
    }
}
