pub mod ai;
pub mod auth;
pub mod catalog;
pub mod quizzes;
pub mod tutorials;
pub mod users;

pub use ai::AiApi;
pub use auth::{AuthApi, RegisterRequest};
pub use catalog::{CatalogApi, NewCollege, NewCourse, NewDepartment, NewSubject};
pub use quizzes::{NewQuiz, QuizApi, QuizQuery, QuizUpdate};
pub use tutorials::{TutorialApi, TutorialQuery, TutorialScope};
pub use users::{UserQuery, UsersApi};
