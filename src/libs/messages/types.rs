/// Every piece of user-facing text the application prints.
///
/// The wording lives in the `Display` impl in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK ENTRY ===
    TaskFormHeader,
    TaskFormIntro,
    TaskSaved,
    TaskSaveFailed,
    TaskDescriptionRequired,
    InvalidTaskInput(String), // validation error
    UnknownCourse(String),    // course name

    // === TASK HISTORY ===
    TaskHistoryHeader,
    NoTasksRecorded,
    TaskDeleted(i64),      // id
    TaskDeleteFailed(i64), // id
    TaskIdMustBePositive,
    ConfirmDeleteFromHistory,

    // === NAVIGATION ===
    MenuAddTask,
    MenuTaskHistory,
    MenuQuit,
    AboutApp,

    // === CONFIGURATION ===
    ConfigSaved(String), // path
    ConfigDeleted,
    ConfigNotFound,
    ConfigParseError(String), // parser error
    ConfigNoCourses,
    StoreReady(String),      // path
    StoreInitFailed(String), // path
    CoursesHeader,

    // === PROMPTS ===
    PromptSelectPage,
    PromptTaskDescription,
    PromptTaskCourse,
    PromptTaskPriority,
    PromptTaskDueDate,
    PromptTaskIdToDelete,
    DueDateFormatHint,
}
