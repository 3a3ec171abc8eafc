//! Fixture execution against `kruft-core`.
//!
//! Each fixture names a function and a JSON object of inputs. String inputs
//! are JSON strings; the executor appends the C terminator itself. A
//! subject given as `raw` instead of `s` is passed without a terminator.
//!
//! Destinations are bounded buffers of `capacity` bytes pre-filled with
//! `0xFF`, followed by one guard byte. The rendered output reports whether
//! the guard survived, so any write past the declared capacity shows up as a
//! fixture mismatch.

use kruft_core::string::{
    self, CopyOutcome, SavePtr, memccpy, stpecpy, strcspn, strlcat, strlcpy, strscat, strscpy,
    strspn, strtok_r,
};
use serde_json::Value;

use crate::error::HarnessError;

/// Functions the executor knows how to drive.
pub const FUNCTIONS: &[&str] = &[
    "strlen", "strnlen", "strcmp", "strspn", "strcspn", "strscpy", "strscat", "stpecpy",
    "strlcpy", "strlcat", "strtok_r", "strdup", "strndup", "memccpy",
];

const FILL: u8 = 0xFF;

/// Runs one fixture case and returns its rendered output.
pub fn execute_fixture_case(function: &str, inputs: &Value) -> Result<String, HarnessError> {
    let args = Args { function, inputs };
    match function {
        "strlen" => Ok(format!("ret={}", string::strlen(&args.subject()?))),
        "strnlen" => {
            let s = args.subject()?;
            Ok(format!("ret={}", string::strnlen(&s, args.usize("limit")?)))
        }
        "strcmp" => Ok(format!(
            "ret={}",
            string::strcmp(&args.c_string("lhs")?, &args.c_string("rhs")?)
        )),
        "strspn" => Ok(format!(
            "ret={}",
            strspn(&args.subject()?, &args.c_string("set")?)
        )),
        "strcspn" => Ok(format!(
            "ret={}",
            strcspn(&args.subject()?, &args.c_string("set")?)
        )),
        "strscpy" | "strscat" | "strlcpy" | "strlcat" => run_copy(&args),
        "stpecpy" => run_stpecpy(&args),
        "strtok_r" => run_strtok(&args),
        "strdup" => Ok(render_dup(string::strdup(&args.subject()?))),
        "strndup" => {
            let s = args.subject()?;
            Ok(render_dup(string::strndup(&s, args.usize("limit")?)))
        }
        "memccpy" => run_memccpy(&args),
        other => Err(HarnessError::UnknownFunction(other.to_string())),
    }
}

struct Args<'a> {
    function: &'a str,
    inputs: &'a Value,
}

impl Args<'_> {
    fn bad(&self, message: impl Into<String>) -> HarnessError {
        HarnessError::bad_input(self.function, message)
    }

    fn str(&self, key: &str) -> Result<&str, HarnessError> {
        self.inputs
            .get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| self.bad(format!("missing string input '{key}'")))
    }

    fn raw(&self, key: &str) -> Result<Vec<u8>, HarnessError> {
        Ok(self.str(key)?.as_bytes().to_vec())
    }

    fn c_string(&self, key: &str) -> Result<Vec<u8>, HarnessError> {
        let mut bytes = self.raw(key)?;
        bytes.push(0);
        Ok(bytes)
    }

    /// The subject string: `s` (terminated) or `raw` (unterminated).
    fn subject(&self) -> Result<Vec<u8>, HarnessError> {
        if self.inputs.get("raw").is_some() {
            self.raw("raw")
        } else {
            self.c_string("s")
        }
    }

    fn usize(&self, key: &str) -> Result<usize, HarnessError> {
        self.inputs
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| self.bad(format!("missing unsigned input '{key}'")))
    }

    fn byte(&self, key: &str) -> Result<u8, HarnessError> {
        match self.str(key)?.as_bytes() {
            [b] => Ok(*b),
            _ => Err(self.bad(format!("input '{key}' must be a single byte"))),
        }
    }
}

/// Destination buffer with a trailing guard byte.
struct Bounded {
    backing: Vec<u8>,
    capacity: usize,
}

impl Bounded {
    /// A `capacity`-byte buffer, optionally seeded with `initial`.
    ///
    /// An initial value at least `capacity` long fills the buffer without a
    /// terminator.
    fn new(capacity: usize, initial: Option<&[u8]>) -> Self {
        let mut backing = vec![FILL; capacity + 1];
        if let Some(init) = initial {
            let n = init.len().min(capacity);
            backing[..n].copy_from_slice(&init[..n]);
            if n < capacity {
                backing[n] = 0;
            }
        }
        Self { backing, capacity }
    }

    fn dest(&mut self) -> &mut [u8] {
        &mut self.backing[..self.capacity]
    }

    fn guard(&self) -> &'static str {
        if self.backing[self.capacity] == FILL {
            "intact"
        } else {
            "clobbered"
        }
    }

    /// `dest="<string>" guard=<state>`, reading the destination as a C string.
    fn render(&self) -> String {
        let dest = &self.backing[..self.capacity];
        let len = string::strnlen(dest, self.capacity);
        self.render_bytes(&dest[..len])
    }

    fn render_bytes(&self, bytes: &[u8]) -> String {
        format!("dest=\"{}\" guard={}", bytes.escape_ascii(), self.guard())
    }
}

fn run_copy(args: &Args<'_>) -> Result<String, HarnessError> {
    let capacity = args.usize("capacity")?;
    let src = args.c_string("src")?;
    let initial = match args.inputs.get("dest") {
        Some(_) => Some(args.raw("dest")?),
        None => None,
    };
    let mut buf = Bounded::new(capacity, initial.as_deref());

    let ret = match args.function {
        "strscpy" => render_outcome(strscpy(buf.dest(), &src)),
        "strscat" => render_outcome(strscat(buf.dest(), &src)),
        "strlcpy" => strlcpy(buf.dest(), &src).to_string(),
        _ => strlcat(buf.dest(), &src).to_string(),
    };
    Ok(format!("ret={ret} {}", buf.render()))
}

fn render_outcome(outcome: CopyOutcome) -> String {
    outcome.as_isize().to_string()
}

fn run_stpecpy(args: &Args<'_>) -> Result<String, HarnessError> {
    let capacity = args.usize("capacity")?;
    let parts = args
        .inputs
        .get("parts")
        .and_then(Value::as_array)
        .ok_or_else(|| args.bad("missing array input 'parts'"))?;

    let mut buf = Bounded::new(capacity, None);
    let mut cursor = Some(0);
    for part in parts {
        let text = part
            .as_str()
            .ok_or_else(|| args.bad("'parts' must hold strings"))?;
        let mut src = text.as_bytes().to_vec();
        src.push(0);
        cursor = stpecpy(buf.dest(), cursor, &src);
    }

    let ret = cursor.map_or_else(|| String::from("null"), |c| c.to_string());
    Ok(format!("ret={ret} {}", buf.render()))
}

fn run_strtok(args: &Args<'_>) -> Result<String, HarnessError> {
    let mut subject = args.subject()?;
    let delim = args.c_string("delim")?;
    let max_calls = match args.inputs.get("max_calls") {
        Some(_) => args.usize("max_calls")?,
        None => usize::MAX,
    };

    let mut save = SavePtr::new();
    let mut tokens = Vec::new();
    while tokens.len() < max_calls {
        let Some((start, len)) = strtok_r(&mut subject, &delim, &mut save) else {
            break;
        };
        tokens.push(format!("\"{}\"", subject[start..start + len].escape_ascii()));
    }

    let rest = save
        .position()
        .map_or_else(|| String::from("null"), |p| p.to_string());
    Ok(format!("tokens=[{}] rest={rest}", tokens.join(", ")))
}

fn render_dup(dup: Option<Box<[u8]>>) -> String {
    match dup {
        Some(bytes) => {
            let content = bytes.strip_suffix(&[0u8]).unwrap_or(&bytes[..]);
            format!("dup=\"{}\" len={}", content.escape_ascii(), bytes.len())
        }
        None => String::from("dup=null len=0"),
    }
}

fn run_memccpy(args: &Args<'_>) -> Result<String, HarnessError> {
    let capacity = args.usize("capacity")?;
    let src = args.raw("src")?;
    let c = args.byte("c")?;
    let n = args.usize("n")?;

    let mut buf = Bounded::new(capacity, None);
    let ret = memccpy(buf.dest(), &src, c, n);
    let copied = ret.unwrap_or_else(|| n.min(capacity).min(src.len()));
    let rendered = buf.render_bytes(&buf.backing[..copied]);
    let ret = ret.map_or_else(|| String::from("null"), |r| r.to_string());
    Ok(format!("ret={ret} {rendered}"))
}
