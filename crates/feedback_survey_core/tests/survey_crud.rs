use feedback_survey_core::store::{open_store_in_memory, FEEDBACK_COLLECTION, SURVEY_COLLECTION};
use feedback_survey_core::{
    DocumentStore, DocumentSurveyRepository, RepoError, SqliteDocumentStore, SurveyService,
};
use uuid::Uuid;

fn service(store: &SqliteDocumentStore) -> SurveyService<DocumentSurveyRepository<'_>> {
    SurveyService::new(DocumentSurveyRepository::new(store))
}

#[test]
fn create_numbers_questions_in_order_on_readback() {
    let store = open_store_in_memory().unwrap();
    let service = service(&store);
    let id = service
        .create_survey("Onboarding", "First week", ["Q1", "Q2", "Q3"])
        .unwrap();

    let surveys = service.list_surveys().unwrap();
    assert_eq!(surveys.len(), 1);
    let survey = &surveys[0];
    assert_eq!(survey.id, id);
    assert_eq!(survey.title, "Onboarding");
    assert_eq!(survey.description, "First week");
    assert!(survey.is_active);

    let numbered = survey
        .questions
        .iter()
        .map(|q| (q.question_number, q.question.as_str()))
        .collect::<Vec<_>>();
    assert_eq!(numbered, [(1, "Q1"), (2, "Q2"), (3, "Q3")]);
}

#[test]
fn create_with_zero_questions_is_allowed() {
    let store = open_store_in_memory().unwrap();
    let service = service(&store);
    let id = service
        .create_survey("Empty", "nothing to ask", Vec::<String>::new())
        .unwrap();

    let survey = service.get_survey(&id.to_string()).unwrap();
    assert!(survey.questions.is_empty());
}

#[test]
fn stored_document_uses_persisted_field_names() {
    let store = open_store_in_memory().unwrap();
    let id = service(&store).create_survey("T", "D", ["Q"]).unwrap();

    let document = store.find_by_id(SURVEY_COLLECTION, id).unwrap().unwrap();
    let mut keys = document.keys().map(String::as_str).collect::<Vec<_>>();
    keys.sort_unstable();
    assert_eq!(
        keys,
        ["_id", "createdAt", "description", "isActive", "questions", "title"]
    );
    assert_eq!(document["_id"], id.to_string());
    assert_eq!(document["questions"][0]["questionNumber"], 1);
}

#[test]
fn active_status_round_trips_without_touching_other_fields() {
    let store = open_store_in_memory().unwrap();
    let service = service(&store);
    let id = service.create_survey("T", "D", ["Q1", "Q2"]).unwrap();
    let raw_id = id.to_string();
    let original = service.get_survey(&raw_id).unwrap();

    service.update_active_status(&raw_id, false).unwrap();
    let inactive = service.get_survey(&raw_id).unwrap();
    assert!(!inactive.is_active);

    service.update_active_status(&raw_id, true).unwrap();
    let restored = service.get_survey(&raw_id).unwrap();
    assert_eq!(restored, original);
}

#[test]
fn setting_same_status_again_still_succeeds() {
    let store = open_store_in_memory().unwrap();
    let service = service(&store);
    let id = service.create_survey("T", "D", ["Q1"]).unwrap();

    service.update_active_status(&id.to_string(), true).unwrap();
    assert!(service.get_survey(&id.to_string()).unwrap().is_active);
}

#[test]
fn status_update_on_missing_survey_is_not_found() {
    let store = open_store_in_memory().unwrap();
    let service = service(&store);
    service.create_survey("T", "D", ["Q1"]).unwrap();
    let before = service.list_surveys().unwrap();

    let missing = Uuid::new_v4();
    let err = service
        .update_active_status(&missing.to_string(), false)
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == missing));
    assert_eq!(service.list_surveys().unwrap(), before);
}

#[test]
fn malformed_ids_are_rejected() {
    let store = open_store_in_memory().unwrap();
    let service = service(&store);
    service.create_survey("T", "D", ["Q1"]).unwrap();
    let before = service.list_surveys().unwrap();

    let status_err = service.update_active_status("not-an-id", false).unwrap_err();
    assert!(matches!(status_err, RepoError::InvalidIdentifier(_)));
    let delete_err = service.delete_survey("not-an-id").unwrap_err();
    assert!(matches!(delete_err, RepoError::InvalidIdentifier(_)));

    assert_eq!(service.list_surveys().unwrap(), before);
}

#[test]
fn delete_removes_survey_and_second_delete_is_not_found() {
    let store = open_store_in_memory().unwrap();
    let service = service(&store);
    let id = service.create_survey("T", "D", ["Q1"]).unwrap();

    service.delete_survey(&id.to_string()).unwrap();
    assert!(service.list_surveys().unwrap().is_empty());

    let err = service.delete_survey(&id.to_string()).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == id));
}

#[test]
fn collections_are_independent() {
    let store = open_store_in_memory().unwrap();
    let id = service(&store).create_survey("T", "D", ["Q1"]).unwrap();

    assert!(store.find_all(FEEDBACK_COLLECTION).unwrap().is_empty());
    assert!(store.find_by_id(FEEDBACK_COLLECTION, id).unwrap().is_none());
    assert_eq!(store.delete_by_id(FEEDBACK_COLLECTION, id).unwrap(), 0);
    assert_eq!(service(&store).list_surveys().unwrap().len(), 1);
}
