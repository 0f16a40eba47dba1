use crate::logger;
use std::process::{Child, Command, Stdio};

/// Audio playback collaborator. Playback is fire-and-forget: the card never
/// waits on it and answering does not depend on it.
pub trait AudioPlayer {
    fn play(&mut self, url: &str);
}

/// Records and logs requests without playing anything.
#[derive(Debug, Default)]
pub struct LoggingAudioPlayer {
    pub last_requested: Option<String>,
}

impl AudioPlayer for LoggingAudioPlayer {
    fn play(&mut self, url: &str) {
        logger::log(&format!("Audio playback requested: {}", url));
        self.last_requested = Some(url.to_string());
    }
}

/// Hands the URL to an external player program such as `mpv` or `ffplay`.
/// At most one player runs at a time; starting a new clip stops the previous
/// one, and every started child is reaped.
#[derive(Debug)]
pub struct CommandAudioPlayer {
    program: String,
    current: Option<Child>,
}

impl CommandAudioPlayer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            current: None,
        }
    }

    /// Kills the running player, if any, and waits for it.
    pub fn stop(&mut self) {
        if let Some(mut child) = self.current.take() {
            if let Ok(None) = child.try_wait() {
                let _ = child.kill();
            }
            if let Err(e) = child.wait() {
                logger::log(&format!("Failed to reap {}: {}", self.program, e));
            }
        }
    }
}

impl AudioPlayer for CommandAudioPlayer {
    fn play(&mut self, url: &str) {
        self.stop();
        let spawned = Command::new(&self.program)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => {
                logger::log(&format!(
                    "Started {} (pid {}) for {}",
                    self.program,
                    child.id(),
                    url
                ));
                self.current = Some(child);
            }
            Err(e) => logger::log(&format!("Failed to start {}: {}", self.program, e)),
        }
    }
}

impl Drop for CommandAudioPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Player for the configured command, or the logging fallback.
pub fn player_for(command: Option<&str>) -> Box<dyn AudioPlayer> {
    match command {
        Some(program) => Box::new(CommandAudioPlayer::new(program)),
        None => Box::new(LoggingAudioPlayer::default()),
    }
}
