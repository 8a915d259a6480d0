//! Command-line configuration for test and demo programs.

use std::fmt::Write;

use tracing::error;

use crate::window::{GlApi, VsyncMode};

/// Configuration parsed from the command line of a test or demo program.
///
/// Built once by [`parse_args`] and owned by the caller; nothing in this
/// crate mutates it afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOptions {
    /// Number of samples per pixel, for anti-aliasing.
    pub samples: i32,
    /// Whether to draw to a back buffer and swap.
    pub double_buffer: bool,
    /// Vertical synchronization preference.
    pub vsync: VsyncMode,
    /// Which OpenGL API to request.
    pub gl_api: GlApi,
    /// Requested OpenGL context major version.
    pub gl_major_version: i32,
    /// Requested OpenGL context minor version.
    pub gl_minor_version: i32,
    /// Whether to animate and draw continuously.
    pub continuous: bool,
    /// Whether the user asked for usage text.
    pub help: bool,
    /// Whether to ignore key repeat events.
    pub ignore_key_repeat: bool,
    /// Whether the window should be resizable.
    pub resizable: bool,
    /// Whether to print verbose event output.
    pub verbose: bool,
    /// Whether to enable platform error-checking.
    pub error_checking: bool,
}

impl Default for TestOptions {
    fn default() -> Self {
        Self {
            samples: 0,
            double_buffer: true,
            vsync: VsyncMode::DontCare,
            gl_api: GlApi::OpenGl,
            gl_major_version: 3,
            gl_minor_version: 3,
            continuous: false,
            help: false,
            ignore_key_repeat: false,
            resizable: false,
            verbose: false,
            error_checking: false,
        }
    }
}

/// Parses the leading flags of a test program's command line.
///
/// `args` is the full argument vector; index 0 is the program name and is
/// never touched. Scanning stops at the first token that does not start with
/// `-` (positional arguments begin there), at `-h`, or at the end of the
/// vector. An unrecognized flag logs an error and sets `help`, but scanning
/// continues past it.
///
/// A missing or malformed `-G` version argument logs an error and returns
/// the options accumulated so far, with `help` left unset. That asymmetry
/// with the unknown-flag path is long-standing observable behavior and is
/// kept as is.
///
/// Returns the options together with the number of leading tokens consumed
/// (program name included); the caller should skip that many tokens to reach
/// its positional arguments. Errors are only ever reported through the log
/// and the `help` field; no parse failure is fatal here.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> (TestOptions, usize) {
    let mut opts = TestOptions::default();

    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_ref();
        match arg {
            "-E" => opts.gl_api = GlApi::OpenGlEs,
            "-G" => {
                i += 1;
                let Some(version) = args.get(i) else {
                    error!("missing OpenGL version argument");
                    return (opts, i);
                };
                match parse_gl_version(version.as_ref()) {
                    Some((major, minor)) => {
                        opts.gl_major_version = major;
                        opts.gl_minor_version = minor;
                    },
                    None => {
                        error!(version = version.as_ref(), "invalid OpenGL version argument");
                        return (opts, i + 1);
                    },
                }
            },
            "-a" => opts.samples = 4,
            "-c" => opts.continuous = true,
            "-d" => opts.double_buffer = false,
            "-e" => opts.error_checking = true,
            "-f" => opts.vsync = VsyncMode::Disabled,
            "-h" => {
                opts.help = true;
                return (opts, i + 1);
            },
            "-i" => opts.ignore_key_repeat = true,
            "-r" => opts.resizable = true,
            "-s" => opts.vsync = VsyncMode::Enabled,
            "-v" => opts.verbose = true,
            _ if !arg.starts_with('-') => break,
            _ => {
                opts.help = true;
                error!(option = arg, "unknown option");
            },
        }
        i += 1;
    }

    (opts, i)
}

fn parse_gl_version(version: &str) -> Option<(i32, i32)> {
    let (major, minor) = version.split_once('.')?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}

/// Returns the usage text for a test program.
///
/// `positionals` describes the program's trailing positional arguments and
/// is appended to the usage line verbatim.
pub fn usage(program: &str, positionals: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Usage: {program} [OPTION]... {positionals}");
    out.push('\n');
    out.push_str(concat!(
        "  -E  Use OpenGL ES\n",
        "  -G  OpenGL context version\n",
        "  -a  Enable anti-aliasing\n",
        "  -c  Continuously animate and draw\n",
        "  -d  Directly draw to window (no double-buffering)\n",
        "  -e  Enable platform error-checking\n",
        "  -f  Fast drawing, explicitly disable vertical sync\n",
        "  -h  Display this help\n",
        "  -i  Ignore key repeat\n",
        "  -v  Print verbose output\n",
        "  -r  Resizable window\n",
        "  -s  Explicitly enable vertical sync\n",
    ));
    out
}
