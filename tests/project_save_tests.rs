use chrono::Utc;
use uuid::Uuid;

use portfolio_cms::entities::project::{ProjectRequest, ProjectRow};
use portfolio_cms::errors::AppError;
use portfolio_cms::repositories::project::{MockProjectRepository, MockTechStackRepository};
use portfolio_cms::repositories::thumbnail::MockThumbnailStore;
use portfolio_cms::use_cases::projects::{NewThumbnail, ProjectHandler};

fn project_row(id: Uuid, title: &str) -> ProjectRow {
    ProjectRow {
        id,
        title: Some(title.to_string()),
        thumbnail: None,
        description: None,
        git_link: None,
        demo_link: None,
        created_at: Utc::now(),
        project_tech_stacks: Vec::new(),
    }
}

fn request_with_skills(skill_ids: Vec<Uuid>) -> ProjectRequest {
    ProjectRequest {
        title: "Portfolio site".to_string(),
        skill_ids,
        ..Default::default()
    }
}

#[actix_rt::test]
async fn save_replaces_join_rows_with_exactly_the_selection() {
    let project_id = Uuid::new_v4();
    let selected = Uuid::new_v4();

    let mut projects = MockProjectRepository::new();
    projects
        .expect_update_project()
        .withf(move |id, _| *id == project_id)
        .times(1)
        .returning(|_, _| Ok(()));
    projects
        .expect_list_projects()
        .times(1)
        .returning(move || Ok(vec![project_row(project_id, "Portfolio site")]));

    // Previously the project may have held any number of join rows; the
    // maintainer clears them all and inserts only the current selection.
    let mut tech_stacks = MockTechStackRepository::new();
    tech_stacks
        .expect_clear_tech_stack()
        .withf(move |id| *id == project_id)
        .times(1)
        .returning(|_| Ok(()));
    tech_stacks
        .expect_insert_tech_stack()
        .withf(move |rows| {
            rows.len() == 1
                && rows[0].project_id == project_id
                && rows[0].skill_id == selected
        })
        .times(1)
        .returning(|_| Ok(()));

    let handler = ProjectHandler::new(projects, tech_stacks, MockThumbnailStore::new());

    handler
        .update(project_id, request_with_skills(vec![selected]), None)
        .await
        .expect("save failed");
}

#[actix_rt::test]
async fn empty_selection_clears_without_inserting() {
    let project_id = Uuid::new_v4();

    let mut projects = MockProjectRepository::new();
    projects
        .expect_update_project()
        .times(1)
        .returning(|_, _| Ok(()));
    projects
        .expect_list_projects()
        .times(1)
        .returning(move || Ok(vec![project_row(project_id, "Portfolio site")]));

    let mut tech_stacks = MockTechStackRepository::new();
    tech_stacks
        .expect_clear_tech_stack()
        .times(1)
        .returning(|_| Ok(()));
    tech_stacks.expect_insert_tech_stack().never();

    let handler = ProjectHandler::new(projects, tech_stacks, MockThumbnailStore::new());

    handler
        .update(project_id, request_with_skills(Vec::new()), None)
        .await
        .expect("save failed");
}

#[actix_rt::test]
async fn clear_failure_aborts_before_the_insert_step() {
    let project_id = Uuid::new_v4();

    let mut projects = MockProjectRepository::new();
    projects
        .expect_update_project()
        .times(1)
        .returning(|_, _| Ok(()));
    projects.expect_list_projects().never();

    let mut tech_stacks = MockTechStackRepository::new();
    tech_stacks
        .expect_clear_tech_stack()
        .times(1)
        .returning(|_| Err(AppError::write_failed("clear project tech stack", "gone away")));
    tech_stacks.expect_insert_tech_stack().never();

    let handler = ProjectHandler::new(projects, tech_stacks, MockThumbnailStore::new());

    let result = handler
        .update(project_id, request_with_skills(vec![Uuid::new_v4()]), None)
        .await;

    assert!(matches!(result, Err(AppError::WriteFailed { .. })));
}

#[actix_rt::test]
async fn upload_failure_prevents_any_project_row_write() {
    let mut projects = MockProjectRepository::new();
    projects.expect_insert_project().never();
    projects.expect_update_project().never();
    projects.expect_list_projects().never();

    let mut tech_stacks = MockTechStackRepository::new();
    tech_stacks.expect_clear_tech_stack().never();
    tech_stacks.expect_insert_tech_stack().never();

    let mut thumbnails = MockThumbnailStore::new();
    thumbnails
        .expect_upload()
        .times(1)
        .returning(|_, _, _| Err(AppError::UploadFailed("bucket quota exceeded".to_string())));

    let handler = ProjectHandler::new(projects, tech_stacks, thumbnails);

    let file = NewThumbnail {
        file_name: "banner.png".to_string(),
        content_type: Some("image/png".to_string()),
        bytes: vec![0u8; 16],
    };

    let result = handler
        .create(request_with_skills(Vec::new()), Some(file))
        .await;

    assert!(matches!(result, Err(AppError::UploadFailed(_))));
}

#[actix_rt::test]
async fn uploaded_thumbnail_resolves_to_the_public_url_before_the_row_write() {
    let project_id = Uuid::new_v4();
    let public_url = "https://cdn.example.com/project_thumbnail/site-banner.png";

    let mut thumbnails = MockThumbnailStore::new();
    thumbnails
        .expect_upload()
        .withf(|key, bytes, content_type| {
            key.ends_with("-site-banner.png")
                && !key.contains(' ')
                && !bytes.is_empty()
                && content_type.as_deref() == Some("image/png")
        })
        .times(1)
        .returning(|_, _, _| Ok(()));
    thumbnails
        .expect_public_url()
        .times(1)
        .returning(move |_| public_url.to_string());

    let mut projects = MockProjectRepository::new();
    projects
        .expect_insert_project()
        .withf(move |payload| payload.thumbnail.as_deref() == Some(public_url))
        .times(1)
        .returning(move |_| Ok(project_id));
    projects
        .expect_list_projects()
        .times(1)
        .returning(move || Ok(vec![project_row(project_id, "Portfolio site")]));

    let mut tech_stacks = MockTechStackRepository::new();
    tech_stacks
        .expect_clear_tech_stack()
        .times(1)
        .returning(|_| Ok(()));
    tech_stacks.expect_insert_tech_stack().never();

    let handler = ProjectHandler::new(projects, tech_stacks, thumbnails);

    let file = NewThumbnail {
        file_name: "site banner.png".to_string(),
        content_type: Some("image/png".to_string()),
        bytes: vec![0u8; 16],
    };

    handler
        .create(request_with_skills(Vec::new()), Some(file))
        .await
        .expect("save failed");
}

#[actix_rt::test]
async fn json_save_passes_the_existing_thumbnail_through() {
    let project_id = Uuid::new_v4();
    let existing = "https://cdn.example.com/project_thumbnail/old.png";

    let mut projects = MockProjectRepository::new();
    projects
        .expect_update_project()
        .withf(move |_, payload| payload.thumbnail.as_deref() == Some(existing))
        .times(1)
        .returning(|_, _| Ok(()));
    projects
        .expect_list_projects()
        .times(1)
        .returning(move || Ok(vec![project_row(project_id, "Portfolio site")]));

    let mut tech_stacks = MockTechStackRepository::new();
    tech_stacks
        .expect_clear_tech_stack()
        .times(1)
        .returning(|_| Ok(()));
    tech_stacks.expect_insert_tech_stack().never();

    let handler = ProjectHandler::new(projects, tech_stacks, MockThumbnailStore::new());

    let request = ProjectRequest {
        title: "Portfolio site".to_string(),
        thumbnail: existing.to_string(),
        ..Default::default()
    };

    handler
        .update(project_id, request, None)
        .await
        .expect("save failed");
}

#[actix_rt::test]
async fn empty_thumbnail_field_is_stored_as_null() {
    let project_id = Uuid::new_v4();

    let mut projects = MockProjectRepository::new();
    projects
        .expect_update_project()
        .withf(|_, payload| payload.thumbnail.is_none())
        .times(1)
        .returning(|_, _| Ok(()));
    projects
        .expect_list_projects()
        .times(1)
        .returning(move || Ok(vec![project_row(project_id, "Portfolio site")]));

    let mut tech_stacks = MockTechStackRepository::new();
    tech_stacks
        .expect_clear_tech_stack()
        .times(1)
        .returning(|_| Ok(()));
    tech_stacks.expect_insert_tech_stack().never();

    let handler = ProjectHandler::new(projects, tech_stacks, MockThumbnailStore::new());

    handler
        .update(project_id, request_with_skills(Vec::new()), None)
        .await
        .expect("save failed");
}

#[actix_rt::test]
async fn project_delete_failure_keeps_the_local_record() {
    let project_id = Uuid::new_v4();

    let mut projects = MockProjectRepository::new();
    projects
        .expect_list_projects()
        .times(1)
        .returning(move || Ok(vec![project_row(project_id, "Portfolio site")]));
    projects
        .expect_delete_project()
        .times(1)
        .returning(|_| Err(AppError::write_failed("delete project", "row is locked")));

    let handler = ProjectHandler::new(
        projects,
        MockTechStackRepository::new(),
        MockThumbnailStore::new(),
    );
    handler.reload().await.expect("reload failed");

    let result = handler.delete(project_id).await;
    assert!(matches!(result, Err(AppError::WriteFailed { .. })));
    assert_eq!(handler.current().len(), 1);
}
