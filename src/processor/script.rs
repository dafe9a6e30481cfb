use std::{
    ffi::OsString,
    io::{BufRead, BufReader, Write},
    process::{Child, ChildStdin, ChildStdout, Command, Stdio},
    string::String,
    thread,
    time::{Duration, Instant},
    vec::Vec,
    };
use bilge::prelude::*;
use log::*;
use super::{CommandProcessor, BackendError, Reply};


const POLL_PERIOD: Duration = Duration::from_millis(10);

/// program to run as command backend
#[derive(Clone, Debug)]
pub struct ScriptConfig {
    pub program: OsString,
    pub args: Vec<OsString>,
    /// time given to the child to exit once its input is closed, it is killed after
    pub grace: Duration,
}
impl ScriptConfig {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {program: program.into(), args: Vec::new(), grace: Duration::from_secs(1)}
    }
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }
    pub fn grace(mut self, grace: Duration) -> Self {
        self.grace = grace;
        self
    }
}

/**
    backend running in a child process

    the protocol is line based on the child's standard streams:

    - the device writes `<command> <parameter>\n` in decimal
    - the child answers `<error> <status>\n` in decimal

    any other answer is a malformed reply. The child is stopped by closing its input, it is killed if it doesn't exit within [ScriptConfig::grace].
*/
pub struct ScriptProcessor {
    config: ScriptConfig,
    session: Option<Session>,
}
/// running child and its streams
struct Session {
    child: Child,
    input: ChildStdin,
    output: BufReader<ChildStdout>,
    line: String,
}

impl ScriptProcessor {
    pub fn new(config: ScriptConfig) -> Self {
        Self {config, session: None}
    }
    /// process id of the running child, if any
    pub fn id(&self) -> Option<u32> {
        self.session.as_ref().map(|session| session.child.id())
    }
}

impl CommandProcessor for ScriptProcessor {
    fn initialize(&mut self) -> Result<(), BackendError> {
        self.shutdown();
        let mut child = Command::new(&self.config.program)
            .args(&self.config.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|err| {
                error!("cannot start backend {:?}: {}", self.config.program, err);
                BackendError::Init
            })?;
        let (Some(input), Some(output)) = (child.stdin.take(), child.stdout.take()) else {
            child.kill().ok();
            child.wait().ok();
            return Err(BackendError::Init);
        };
        info!("backend {:?} started with pid {}", self.config.program, child.id());
        self.session = Some(Session {
            child,
            input,
            output: BufReader::new(output),
            line: String::new(),
        });
        Ok(())
    }
    fn shutdown(&mut self) {
        let Some(session) = self.session.take()
            else {return};
        let Session {mut child, input, ..} = session;
        // closing the input is the stop request
        drop(input);
        let deadline = Instant::now() + self.config.grace;
        loop {
            match child.try_wait() {
                Ok(Some(status)) => {
                    debug!("backend exited with {}", status);
                    return;
                },
                Ok(None) if Instant::now() < deadline => thread::sleep(POLL_PERIOD),
                Ok(None) => break,
                Err(err) => {
                    warn!("failed to poll backend exit: {}", err);
                    break;
                },
            }
        }
        warn!("backend {:?} did not exit, killing it", self.config.program);
        if let Err(err) = child.kill() {
            warn!("failed to kill backend: {}", err);
        }
        match child.wait() {
            Ok(status) => debug!("backend exited with {}", status),
            Err(err) => warn!("failed to wait for backend exit: {}", err),
        }
    }
    fn is_initialized(&self) -> bool {self.session.is_some()}

    fn execute(&mut self, command: u8, parameter: u23) -> Result<Reply, BackendError> {
        let session = self.session.as_mut().ok_or(BackendError::NotInitialized)?;
        writeln!(session.input, "{} {}", command, parameter.value())?;
        session.input.flush()?;
        session.line.clear();
        if session.output.read_line(&mut session.line)? == 0 {
            warn!("backend closed its output");
            return Err(BackendError::MalformedReply);
        }
        parse_reply(&session.line)
    }
}
impl Drop for ScriptProcessor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// parse a `<error> <status>` line
fn parse_reply(line: &str) -> Result<Reply, BackendError> {
    let mut fields = line.split_whitespace();
    let (Some(error), Some(status), None) = (fields.next(), fields.next(), fields.next()) else {
        warn!("unexpected backend reply {:?}", line);
        return Err(BackendError::MalformedReply);
    };
    Ok(Reply {
        error: error.parse().map_err(|_| BackendError::MalformedReply)?,
        status: status.parse().map_err(|_| BackendError::MalformedReply)?,
    })
}
