//! Interactive menu loop.
//!
//! # Responsibility
//! - Read a menu selection, prompt for the operation's fields, call the
//!   matching core service and print the outcome.
//!
//! # Invariants
//! - One operation (prompts plus store round trip) finishes before the next
//!   menu read.
//! - Bad input and failed operations are reported and the loop continues;
//!   only Exit, closed input or a console I/O failure end the loop.

use feedback_survey_core::{
    parse_active_flag, DocumentFeedbackRepository, DocumentSurveyRepository, FeedbackService,
    ParseError, RepoError, StoreContext, SurveyService,
};
use log::warn;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};
use std::str::FromStr;

const MENU: &str = "
=== FEEDBACK & SURVEY MANAGEMENT SYSTEM ===
1. Create Feedback
2. View All Feedbacks
3. Update Feedback
4. Delete Feedback
5. Create Survey
6. View All Surveys
7. Update Survey Status
8. Delete Survey
9. Exit";
const SEPARATOR: &str = "------------------------";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    CreateFeedback,
    ListFeedbacks,
    UpdateFeedback,
    DeleteFeedback,
    CreateSurvey,
    ListSurveys,
    UpdateSurveyStatus,
    DeleteSurvey,
    Exit,
}

impl MenuChoice {
    fn parse(line: &str) -> Result<Self, &'static str> {
        let number = line
            .trim()
            .parse::<i64>()
            .map_err(|_| "Invalid input! Please enter a number between 1-9.")?;

        match number {
            1 => Ok(Self::CreateFeedback),
            2 => Ok(Self::ListFeedbacks),
            3 => Ok(Self::UpdateFeedback),
            4 => Ok(Self::DeleteFeedback),
            5 => Ok(Self::CreateSurvey),
            6 => Ok(Self::ListSurveys),
            7 => Ok(Self::UpdateSurveyStatus),
            8 => Ok(Self::DeleteSurvey),
            9 => Ok(Self::Exit),
            _ => Err("Invalid option! Please choose between 1-9."),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entity {
    Feedback,
    Survey,
}

impl Entity {
    fn title(self) -> &'static str {
        match self {
            Self::Feedback => "Feedback",
            Self::Survey => "Survey",
        }
    }
}

impl Display for Entity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Feedback => write!(f, "feedback"),
            Self::Survey => write!(f, "survey"),
        }
    }
}

/// Why one menu operation stopped early.
#[derive(Debug)]
enum ShellError {
    Io(io::Error),
    EndOfInput,
    Input(String),
    Failed {
        entity: Entity,
        action: &'static str,
        source: RepoError,
    },
}

impl From<io::Error> for ShellError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl ShellError {
    fn failed(entity: Entity, action: &'static str) -> impl FnOnce(RepoError) -> Self {
        move |source| Self::Failed {
            entity,
            action,
            source,
        }
    }
}

type OpResult = Result<(), ShellError>;

/// Menu-driven front-end over one [`StoreContext`].
pub struct Shell<'ctx, R, W> {
    ctx: &'ctx StoreContext,
    input: R,
    output: W,
}

impl<'ctx, R: BufRead, W: Write> Shell<'ctx, R, W> {
    pub fn new(ctx: &'ctx StoreContext, input: R, output: W) -> Self {
        Self { ctx, input, output }
    }

    /// Runs until Exit is chosen or input is closed.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let line = match self.prompt("Choose an option (1-9): ") {
                Ok(line) => line,
                Err(ShellError::Io(err)) => return Err(err),
                Err(_) => {
                    writeln!(self.output)?;
                    return Ok(());
                }
            };

            let choice = match MenuChoice::parse(&line) {
                Ok(choice) => choice,
                Err(message) => {
                    writeln!(self.output, "{message}")?;
                    continue;
                }
            };

            if choice == MenuChoice::Exit {
                writeln!(self.output, "Thank you for using Feedback & Survey System!")?;
                return Ok(());
            }

            match self.dispatch(choice) {
                Ok(()) => {}
                Err(ShellError::Io(err)) => return Err(err),
                Err(ShellError::EndOfInput) => {
                    writeln!(self.output)?;
                    return Ok(());
                }
                Err(ShellError::Input(message)) => {
                    writeln!(self.output, "Invalid input! {message}")?;
                }
                Err(ShellError::Failed {
                    entity,
                    action,
                    source,
                }) => {
                    warn!("event=shell_op module=cli status=error entity={entity} action={action} error={source}");
                    writeln!(self.output, "{}", describe_failure(entity, action, &source))?;
                }
            }
        }
    }

    /// Gives back the output sink, mainly for inspecting captured output.
    pub fn into_output(self) -> W {
        self.output
    }

    fn dispatch(&mut self, choice: MenuChoice) -> OpResult {
        match choice {
            MenuChoice::CreateFeedback => self.create_feedback(),
            MenuChoice::ListFeedbacks => self.list_feedbacks(),
            MenuChoice::UpdateFeedback => self.update_feedback(),
            MenuChoice::DeleteFeedback => self.delete_feedback(),
            MenuChoice::CreateSurvey => self.create_survey(),
            MenuChoice::ListSurveys => self.list_surveys(),
            MenuChoice::UpdateSurveyStatus => self.update_survey_status(),
            MenuChoice::DeleteSurvey => self.delete_survey(),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn feedback_service(&self) -> FeedbackService<DocumentFeedbackRepository<'ctx>> {
        let ctx = self.ctx;
        FeedbackService::new(DocumentFeedbackRepository::new(ctx.store()))
    }

    fn survey_service(&self) -> SurveyService<DocumentSurveyRepository<'ctx>> {
        let ctx = self.ctx;
        SurveyService::new(DocumentSurveyRepository::new(ctx.store()))
    }

    fn create_feedback(&mut self) -> OpResult {
        writeln!(self.output, "\n=== CREATE NEW FEEDBACK ===")?;
        let user_name = self.prompt("Enter user name: ")?;
        let user_email = self.prompt("Enter user email: ")?;
        let message = self.prompt("Enter feedback message: ")?;
        let rating = self.prompt_number::<i32>("Enter rating (1-5): ", "rating")?;

        let id = self
            .feedback_service()
            .create_feedback(user_name, user_email, message, rating)
            .map_err(ShellError::failed(Entity::Feedback, "creating"))?;
        writeln!(self.output, "Feedback created successfully! ID: {id}")?;
        Ok(())
    }

    fn list_feedbacks(&mut self) -> OpResult {
        writeln!(self.output, "\n=== ALL FEEDBACKS ===")?;
        let feedbacks = self
            .feedback_service()
            .list_feedbacks()
            .map_err(ShellError::failed(Entity::Feedback, "listing"))?;

        if feedbacks.is_empty() {
            writeln!(self.output, "No feedbacks found.")?;
            return Ok(());
        }

        for feedback in feedbacks {
            writeln!(self.output, "ID: {}", feedback.id)?;
            writeln!(self.output, "Name: {}", feedback.user_name)?;
            writeln!(self.output, "Email: {}", feedback.user_email)?;
            writeln!(self.output, "Rating: {}", feedback.rating)?;
            writeln!(self.output, "Message: {}", feedback.message)?;
            writeln!(
                self.output,
                "Date: {}",
                feedback.created_at.format(TIMESTAMP_FORMAT)
            )?;
            if let Some(updated_at) = feedback.updated_at {
                writeln!(self.output, "Updated: {}", updated_at.format(TIMESTAMP_FORMAT))?;
            }
            writeln!(self.output, "{SEPARATOR}")?;
        }
        Ok(())
    }

    fn update_feedback(&mut self) -> OpResult {
        writeln!(self.output, "\n=== UPDATE FEEDBACK ===")?;
        let raw_id = self.prompt("Enter feedback ID to update: ")?;

        let service = self.feedback_service();
        service
            .get_feedback(&raw_id)
            .map_err(ShellError::failed(Entity::Feedback, "updating"))?;

        let message = self.prompt("Enter new feedback message: ")?;
        let rating = self.prompt_number::<i32>("Enter new rating (1-5): ", "rating")?;

        service
            .update_feedback(&raw_id, message, rating)
            .map_err(ShellError::failed(Entity::Feedback, "updating"))?;
        writeln!(self.output, "Feedback updated successfully!")?;
        Ok(())
    }

    fn delete_feedback(&mut self) -> OpResult {
        writeln!(self.output, "\n=== DELETE FEEDBACK ===")?;
        let raw_id = self.prompt("Enter feedback ID to delete: ")?;

        self.feedback_service()
            .delete_feedback(&raw_id)
            .map_err(ShellError::failed(Entity::Feedback, "deleting"))?;
        writeln!(self.output, "Feedback deleted successfully!")?;
        Ok(())
    }

    fn create_survey(&mut self) -> OpResult {
        writeln!(self.output, "\n=== CREATE NEW SURVEY ===")?;
        let title = self.prompt("Enter survey title: ")?;
        let description = self.prompt("Enter survey description: ")?;
        // Counts below one mean no questions.
        let question_count =
            self.prompt_number::<i64>("Enter number of questions: ", "number of questions")?;

        let mut questions = Vec::new();
        for number in 1..=question_count {
            questions.push(self.prompt(&format!("Enter question {number}: "))?);
        }

        let id = self
            .survey_service()
            .create_survey(title, description, questions)
            .map_err(ShellError::failed(Entity::Survey, "creating"))?;
        writeln!(self.output, "Survey created successfully! ID: {id}")?;
        Ok(())
    }

    fn list_surveys(&mut self) -> OpResult {
        writeln!(self.output, "\n=== ALL SURVEYS ===")?;
        let surveys = self
            .survey_service()
            .list_surveys()
            .map_err(ShellError::failed(Entity::Survey, "listing"))?;

        if surveys.is_empty() {
            writeln!(self.output, "No surveys found.")?;
            return Ok(());
        }

        for survey in surveys {
            writeln!(self.output, "ID: {}", survey.id)?;
            writeln!(self.output, "Title: {}", survey.title)?;
            writeln!(self.output, "Description: {}", survey.description)?;
            writeln!(self.output, "Active: {}", survey.is_active)?;
            writeln!(
                self.output,
                "Created: {}",
                survey.created_at.format(TIMESTAMP_FORMAT)
            )?;
            writeln!(self.output, "Questions:")?;
            for question in &survey.questions {
                writeln!(
                    self.output,
                    "  {}. {}",
                    question.question_number, question.question
                )?;
            }
            writeln!(self.output, "{SEPARATOR}")?;
        }
        Ok(())
    }

    fn update_survey_status(&mut self) -> OpResult {
        writeln!(self.output, "\n=== UPDATE SURVEY STATUS ===")?;
        let raw_id = self.prompt("Enter survey ID: ")?;
        let raw_flag = self.prompt("Set survey active? (true/false): ")?;
        let is_active = parse_active_flag(&raw_flag).map_err(|err| match err {
            ParseError::InvalidInput(message) | ParseError::InvalidIdentifier(message) => {
                ShellError::Input(message)
            }
        })?;

        self.survey_service()
            .update_active_status(&raw_id, is_active)
            .map_err(ShellError::failed(Entity::Survey, "updating"))?;
        writeln!(self.output, "Survey status updated successfully!")?;
        Ok(())
    }

    fn delete_survey(&mut self) -> OpResult {
        writeln!(self.output, "\n=== DELETE SURVEY ===")?;
        let raw_id = self.prompt("Enter survey ID to delete: ")?;

        self.survey_service()
            .delete_survey(&raw_id)
            .map_err(ShellError::failed(Entity::Survey, "deleting"))?;
        writeln!(self.output, "Survey deleted successfully!")?;
        Ok(())
    }

    /// Prints `label` and reads one line without its line terminator.
    fn prompt(&mut self, label: &str) -> Result<String, ShellError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ShellError::EndOfInput);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    fn prompt_number<T: FromStr>(&mut self, label: &str, field: &str) -> Result<T, ShellError> {
        let raw = self.prompt(label)?;
        raw.trim()
            .parse::<T>()
            .map_err(|_| ShellError::Input(format!("{field} must be a whole number.")))
    }
}

fn describe_failure(entity: Entity, action: &str, err: &RepoError) -> String {
    match err {
        RepoError::InvalidIdentifier(_) => format!("Invalid {entity} ID format!"),
        RepoError::NotFound(_) => format!("{} not found!", entity.title()),
        RepoError::InvalidInput(message) => format!("Invalid input! {message}"),
        RepoError::Store(_) | RepoError::InvalidData(_) => {
            format!("Error {action} {entity}: {err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MenuChoice, Shell, ShellError};
    use feedback_survey_core::store::FEEDBACK_COLLECTION;
    use feedback_survey_core::{
        DocumentFeedbackRepository, DocumentStore, DocumentSurveyRepository, FeedbackService,
        StoreContext, SurveyService, UnavailableStore,
    };
    use std::io::Cursor;

    fn run_script(ctx: &StoreContext, script: &str) -> String {
        let mut shell = Shell::new(ctx, Cursor::new(script.as_bytes().to_vec()), Vec::new());
        shell.run().unwrap();
        String::from_utf8(shell.into_output()).unwrap()
    }

    #[test]
    fn menu_choice_parses_all_options_and_rejects_others() {
        assert_eq!(MenuChoice::parse(" 1 ").unwrap(), MenuChoice::CreateFeedback);
        assert_eq!(MenuChoice::parse("9").unwrap(), MenuChoice::Exit);
        assert!(MenuChoice::parse("0").unwrap_err().contains("Invalid option"));
        assert!(MenuChoice::parse("10").unwrap_err().contains("Invalid option"));
        assert!(MenuChoice::parse("abc").unwrap_err().contains("Invalid input"));
    }

    #[test]
    fn bad_menu_input_is_reported_and_loop_continues() {
        let ctx = StoreContext::in_memory().unwrap();
        let output = run_script(&ctx, "hello\n42\n9\n");

        assert!(output.contains("Invalid input! Please enter a number between 1-9."));
        assert!(output.contains("Invalid option! Please choose between 1-9."));
        assert!(output.contains("Thank you for using Feedback & Survey System!"));
    }

    #[test]
    fn closed_input_ends_the_loop() {
        let ctx = StoreContext::in_memory().unwrap();
        let output = run_script(&ctx, "1\nAlice\n");

        assert!(output.contains("Enter user email: "));
        assert!(!output.contains("created successfully"));
    }

    #[test]
    fn create_and_list_feedback() {
        let ctx = StoreContext::in_memory().unwrap();
        let output = run_script(&ctx, "1\nAlice\na@x.com\nGreat service\n5\n2\n9\n");

        assert!(output.contains("Feedback created successfully! ID: "));
        assert!(output.contains("Name: Alice"));
        assert!(output.contains("Email: a@x.com"));
        assert!(output.contains("Message: Great service"));
        assert!(output.contains("Rating: 5"));
        assert!(!output.contains("Updated: "));
    }

    #[test]
    fn non_numeric_rating_aborts_create() {
        let ctx = StoreContext::in_memory().unwrap();
        let output = run_script(&ctx, "1\nAlice\na@x.com\nhi\nfive\n9\n");

        assert!(output.contains("Invalid input! rating must be a whole number."));
        assert!(ctx.store().find_all(FEEDBACK_COLLECTION).unwrap().is_empty());
    }

    #[test]
    fn update_feedback_checks_existence_before_prompting() {
        let ctx = StoreContext::in_memory().unwrap();
        let missing = uuid_like();
        let output = run_script(&ctx, &format!("3\n{missing}\n9\n"));

        assert!(output.contains("Feedback not found!"));
        assert!(!output.contains("Enter new feedback message"));
    }

    #[test]
    fn update_feedback_changes_message_and_rating() {
        let ctx = StoreContext::in_memory().unwrap();
        let service = FeedbackService::new(DocumentFeedbackRepository::new(ctx.store()));
        let id = service
            .create_feedback("Alice", "a@x.com", "Great service", 5)
            .unwrap();

        let output = run_script(&ctx, &format!("3\n{id}\nEven better\n4\n2\n9\n"));

        assert!(output.contains("Feedback updated successfully!"));
        assert!(output.contains("Message: Even better"));
        assert!(output.contains("Rating: 4"));
        assert!(output.contains("Updated: "));
    }

    #[test]
    fn malformed_ids_are_reported() {
        let ctx = StoreContext::in_memory().unwrap();
        let output = run_script(&ctx, "4\nnot-an-id\n8\nnot-an-id\n9\n");

        assert!(output.contains("Invalid feedback ID format!"));
        assert!(output.contains("Invalid survey ID format!"));
    }

    #[test]
    fn create_and_list_survey_with_numbered_questions() {
        let ctx = StoreContext::in_memory().unwrap();
        let output = run_script(
            &ctx,
            "5\nOnboarding\nFirst week\n3\nQ1\nQ2\nQ3\n6\n9\n",
        );

        assert!(output.contains("Survey created successfully! ID: "));
        assert!(output.contains("Title: Onboarding"));
        assert!(output.contains("Active: true"));
        let q1 = output.find("  1. Q1").unwrap();
        let q2 = output.find("  2. Q2").unwrap();
        let q3 = output.find("  3. Q3").unwrap();
        assert!(q1 < q2 && q2 < q3);
    }

    #[test]
    fn survey_status_rejects_non_boolean_and_accepts_false() {
        let ctx = StoreContext::in_memory().unwrap();
        let service = SurveyService::new(DocumentSurveyRepository::new(ctx.store()));
        let id = service.create_survey("T", "D", ["Q1"]).unwrap();

        let output = run_script(&ctx, &format!("7\n{id}\nmaybe\n7\n{id}\nFALSE\n9\n"));

        assert!(output.contains("Invalid input! expected `true` or `false`, got `maybe`"));
        assert!(output.contains("Survey status updated successfully!"));
        assert!(!service.get_survey(&id.to_string()).unwrap().is_active);
    }

    #[test]
    fn delete_survey_twice_reports_not_found() {
        let ctx = StoreContext::in_memory().unwrap();
        let service = SurveyService::new(DocumentSurveyRepository::new(ctx.store()));
        let id = service.create_survey("T", "D", Vec::<String>::new()).unwrap();

        let output = run_script(&ctx, &format!("8\n{id}\n8\n{id}\n6\n9\n"));

        assert!(output.contains("Survey deleted successfully!"));
        assert!(output.contains("Survey not found!"));
        assert!(output.contains("No surveys found."));
    }

    #[test]
    fn unavailable_store_reports_errors_without_ending_the_loop() {
        let ctx = StoreContext::from_store(Box::new(UnavailableStore::new("connection refused")));
        let output = run_script(&ctx, "2\n6\n9\n");

        assert!(output.contains("Error listing feedback: document store unavailable"));
        assert!(output.contains("Error listing survey: document store unavailable"));
        assert!(output.contains("Thank you for using Feedback & Survey System!"));
    }

    #[test]
    fn huge_question_count_waits_for_questions_without_preallocating() {
        let ctx = StoreContext::in_memory().unwrap();
        let output = run_script(&ctx, "5\nT\nD\n18446744073709551615\nQ1\n");

        assert!(output.contains("Enter question 2: "));
        assert!(!output.contains("Survey created successfully!"));
    }

    #[test]
    fn negative_question_count_creates_survey_without_questions() {
        let ctx = StoreContext::in_memory().unwrap();
        let output = run_script(&ctx, "5\nT\nD\n-1\n6\n9\n");

        assert!(!output.contains("Invalid input!"));
        assert!(!output.contains("Enter question 1: "));
        assert!(output.contains("Survey created successfully! ID: "));
        let service = SurveyService::new(DocumentSurveyRepository::new(ctx.store()));
        let surveys = service.list_surveys().unwrap();
        assert_eq!(surveys.len(), 1);
        assert!(surveys[0].questions.is_empty());
    }

    #[test]
    fn non_boolean_flag_is_reported_as_input_error() {
        let ctx = StoreContext::in_memory().unwrap();
        let script = format!("{}\nmaybe\n", uuid_like());
        let mut shell = Shell::new(&ctx, Cursor::new(script.into_bytes()), Vec::new());
        let err = shell.update_survey_status().unwrap_err();
        assert!(matches!(err, ShellError::Input(ref message) if message.contains("`maybe`")));
    }

    fn uuid_like() -> String {
        "00000000-0000-4000-8000-000000000000".to_string()
    }
}
