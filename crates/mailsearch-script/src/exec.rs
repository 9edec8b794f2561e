use mailsearch_core::{MailsearchError, Result};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus};
use std::time::Instant;

/// Options for running the mailbox script
#[derive(Debug, Clone)]
pub struct ExecOptions {
    pub script: PathBuf,
    pub args: Vec<String>,
}

/// Result of running the mailbox script
#[derive(Debug, Clone)]
pub struct ExecResult {
    pub exit_code: i32,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
    pub duration_ms: u64,
}

impl ExecResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Write the captured output to our own stdout / stderr, byte for byte
    pub fn relay(&self) -> io::Result<()> {
        self.relay_to(&mut io::stdout().lock(), &mut io::stderr().lock())
    }

    /// Write the captured output to `out` and `err`
    ///
    /// A reader that closed early (broken pipe) is not an error: the rest of
    /// that stream is dropped and the other stream is still written.
    pub fn relay_to(&self, out: &mut impl Write, err: &mut impl Write) -> io::Result<()> {
        write_ignoring_closed(out, &self.stdout)?;
        write_ignoring_closed(err, &self.stderr)
    }
}

fn write_ignoring_closed(writer: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    match writer.write_all(bytes).and_then(|_| writer.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            log::debug!("output reader went away; dropping the rest");
            Ok(())
        }
        other => other,
    }
}

/// Run the script and wait for it to exit
///
/// The child inherits the environment (credentials included) and the
/// current directory.
pub fn exec_script(options: &ExecOptions) -> Result<ExecResult> {
    log::debug!(
        "running {} {}",
        options.script.display(),
        options.args.join(" ")
    );

    let started = Instant::now();
    let output = Command::new(&options.script)
        .args(&options.args)
        .output()
        .map_err(|e| {
            MailsearchError::ScriptExecFailed(format!(
                "failed to run {}: {}",
                options.script.display(),
                e
            ))
        })?;
    let duration_ms = started.elapsed().as_millis() as u64;

    let exit_code = exit_code(output.status);
    log::debug!("script exited with {} after {}ms", exit_code, duration_ms);

    Ok(ExecResult {
        exit_code,
        stdout: output.stdout,
        stderr: output.stderr,
        duration_ms,
    })
}

/// Exit code, with signal termination mapped to `128 + signal` on Unix
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
