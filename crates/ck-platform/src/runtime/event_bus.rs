use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeCommand {
    PauseMonitoring,
    ResumeMonitoring,
    Shutdown,
}

pub type RuntimeCommandSender = mpsc::Sender<RuntimeCommand>;
pub type RuntimeCommandReceiver = mpsc::Receiver<RuntimeCommand>;

const COMMAND_CHANNEL_CAPACITY: usize = 16;

pub fn command_channel() -> (RuntimeCommandSender, RuntimeCommandReceiver) {
    mpsc::channel(COMMAND_CHANNEL_CAPACITY)
}
