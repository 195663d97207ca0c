//! Smoke probe for the native `mtmath_c` library.
//!
//! Loads the library at runtime, calls `foo()` and runs `init_big_int` on a
//! fresh struct, then reports both results.

#![allow(unsafe_code)]

use std::ffi::OsString;
use std::mem::MaybeUninit;
use std::os::raw::{c_int, c_uchar, c_ulonglong};
use std::path::{Path, PathBuf};

use libloading::{Library, Symbol};
use serde::Serialize;
use thiserror::Error;

/// Base name of the native library.
pub const LIBRARY_NAME: &str = "mtmath_c";

#[repr(C)]
struct ByteArrayRepr {
    len: c_ulonglong,
    bytes: *mut u8,
}

#[repr(C)]
struct BigIntRepr {
    flags: c_uchar,
    digits: ByteArrayRepr,
}

type FooFn = unsafe extern "C" fn() -> c_int;
type InitBigIntFn = unsafe extern "C" fn(*mut BigIntRepr);

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("failed to load native library {path}")]
    Load {
        path: String,
        #[source]
        source: libloading::Error,
    },

    #[error("symbol `{symbol}` not found in {path}")]
    Symbol {
        symbol: &'static str,
        path: String,
        #[source]
        source: libloading::Error,
    },
}

/// What the probe observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProbeReport {
    pub library: String,
    pub foo: i32,
    pub flags: u8,
}

impl ProbeReport {
    /// Command output: `foo` and `flags` on separate lines, or a JSON object.
    pub fn render(&self, json: bool) -> serde_json::Result<String> {
        if json {
            let mut text = serde_json::to_string_pretty(self)?;
            text.push('\n');
            Ok(text)
        } else {
            Ok(format!("{}\n{}\n", self.foo, self.flags))
        }
    }
}

/// Platform file name of the library (`libmtmath_c.so`, `mtmath_c.dll`, ...).
#[must_use]
pub fn default_library_name() -> OsString {
    libloading::library_filename(LIBRARY_NAME)
}

/// The library next to the running executable if present, otherwise the
/// bare platform name for the system loader to resolve.
#[must_use]
pub fn locate_default() -> PathBuf {
    let name = default_library_name();
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(&name)))
        .filter(|candidate| candidate.is_file())
        .unwrap_or_else(|| PathBuf::from(name))
}

/// Load the library and run the probe.
pub fn run(requested: Option<&Path>) -> Result<ProbeReport, ProbeError> {
    let path = requested.map_or_else(locate_default, Path::to_path_buf);
    let display = path.display().to_string();
    tracing::debug!(library = %path.display(), "loading native library");

    // SAFETY: loading runs the library's initialisers; mtmath_c has none
    // beyond the Rust runtime's.
    let library = unsafe { Library::new(&path) }.map_err(|source| ProbeError::Load {
        path: display.clone(),
        source,
    })?;
    probe_library(&library, display)
}

fn symbol<'lib, T>(
    library: &'lib Library,
    name: &'static str,
    path: &str,
) -> Result<Symbol<'lib, T>, ProbeError> {
    // SAFETY: `T` matches the exported signature in mtmath_c.h.
    unsafe { library.get(name.as_bytes()) }.map_err(|source| ProbeError::Symbol {
        symbol: name,
        path: path.to_string(),
        source,
    })
}

fn probe_library(library: &Library, path: String) -> Result<ProbeReport, ProbeError> {
    let foo: Symbol<FooFn> = symbol(library, "foo", &path)?;
    let init_big_int: Symbol<InitBigIntFn> = symbol(library, "init_big_int", &path)?;

    // SAFETY: `foo` takes no arguments and has no preconditions.
    let foo = unsafe { foo() };

    let mut value = MaybeUninit::<BigIntRepr>::uninit();
    // SAFETY: `init_big_int` writes every field and allocates nothing.
    let value = unsafe {
        init_big_int(value.as_mut_ptr());
        value.assume_init()
    };
    tracing::debug!(
        foo,
        flags = value.flags,
        len = value.digits.len,
        null_digits = value.digits.bytes.is_null(),
        "probe finished"
    );

    Ok(ProbeReport {
        library: path,
        foo,
        flags: value.flags,
    })
}
