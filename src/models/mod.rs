pub mod anchor;
pub mod bank;
pub mod loaders;
pub mod page;
pub mod question;
pub mod subject;

pub use anchor::{Anchor, Instruction, Passage};
pub use bank::{BankFile, SubjectBank};
pub use loaders::{load_all_banks, load_subject_bank};
pub use page::{ContentKind, ContentPage, Page, PageKind, QuestionPage};
pub use question::{AnchorRef, AnswerOption, Question, RenderHints};
pub use subject::Subject;
