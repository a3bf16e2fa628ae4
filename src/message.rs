use todo::core::task::TaskId;

#[derive(Debug, Clone)]
pub enum Message {
    // Todo input
    InputChanged(String),
    InputSubmit,

    // Task intents
    ToggleTaskDone(TaskId),
    RemoveTask(TaskId),

    // Inline rename
    StartEditing(TaskId),
    EditBufferChanged(TaskId, String),
    SubmitEditing(TaskId),
    CancelEditing(TaskId),

    // Prompts
    AcknowledgeDuplicate,
    ConfirmRemoval,
    DeclineRemoval,

    // Settings
    OpenSettings,
    CloseSettings,
    ToggleDebugLogging,
    ToggleUniqueTitlesOnRename,
}
