use chrono::Utc;
use uuid::Uuid;

use portfolio_cms::entities::experience::{Experience, ExperienceRequest};
use portfolio_cms::entities::skill::{NewSkill, Skill};
use portfolio_cms::errors::AppError;
use portfolio_cms::repositories::experience::MockExperienceRepository;
use portfolio_cms::repositories::skill::MockSkillRepository;
use portfolio_cms::use_cases::content_list::ContentList;
use portfolio_cms::use_cases::experiences::ExperienceHandler;
use portfolio_cms::use_cases::skills::SkillHandler;

fn experience(company: &str) -> Experience {
    Experience {
        id: Uuid::new_v4(),
        company: Some(company.to_string()),
        role: Some("Engineer".to_string()),
        from_date: Some("2023-01-01".to_string()),
        to_date: None,
        summary: None,
        bullets: vec!["Built things".to_string()],
        company_link: None,
        created_at: Utc::now(),
    }
}

fn skill(name: &str) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        skill: Some(name.to_string()),
    }
}

// ───── Experiences ──────────────────────────────────────────────────

#[actix_rt::test]
async fn experience_create_writes_then_reloads() {
    let mut repo = MockExperienceRepository::new();

    repo.expect_insert_experience()
        .withf(|payload| {
            payload.company.as_deref() == Some("Initech")
                && payload.bullets == vec!["Did X".to_string(), "Did Y".to_string()]
                && payload.to.is_none()
        })
        .times(1)
        .returning(|_| Ok(()));
    repo.expect_list_experiences()
        .times(1)
        .returning(|| Ok(vec![experience("Initech")]));

    let handler = ExperienceHandler::new(repo);

    let request = ExperienceRequest {
        company: "Initech".to_string(),
        role: "Engineer".to_string(),
        from: "2023-01-01".to_string(),
        bullets_text: "Did X\n\nDid Y  \n".to_string(),
        ..Default::default()
    };

    let listed = handler.create(request).await.expect("create failed");

    assert_eq!(listed.len(), 1);
    assert_eq!(handler.current().len(), 1);
}

#[actix_rt::test]
async fn experience_with_bad_link_never_reaches_the_backend() {
    let mut repo = MockExperienceRepository::new();
    repo.expect_insert_experience().never();
    repo.expect_list_experiences().never();

    let handler = ExperienceHandler::new(repo);

    let request = ExperienceRequest {
        company: "Initech".to_string(),
        company_link: "not a url".to_string(),
        ..Default::default()
    };

    let result = handler.create(request).await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[actix_rt::test]
async fn experience_reload_failure_keeps_previous_list() {
    let calls = std::sync::atomic::AtomicUsize::new(0);

    let mut repo = MockExperienceRepository::new();
    repo.expect_list_experiences()
        .times(2)
        .returning(move || {
            if calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst) == 0 {
                Ok(vec![experience("Initech"), experience("Globex")])
            } else {
                Err(AppError::ReadFailed("experiences: timeout".to_string()))
            }
        });

    let handler = ExperienceHandler::new(repo);

    handler.reload().await.expect("first reload failed");
    assert_eq!(handler.current().len(), 2);

    let result = handler.reload().await;
    assert!(matches!(result, Err(AppError::ReadFailed(_))));
    assert_eq!(handler.current().len(), 2);
}

#[actix_rt::test]
async fn experience_delete_removes_exactly_the_target() {
    let kept = experience("Globex");
    let doomed = experience("Initech");
    let kept_id = kept.id;
    let doomed_id = doomed.id;

    let mut repo = MockExperienceRepository::new();
    repo.expect_list_experiences()
        .times(1)
        .returning(move || Ok(vec![kept.clone(), doomed.clone()]));
    repo.expect_delete_experience()
        .withf(move |id| *id == doomed_id)
        .times(1)
        .returning(|_| Ok(()));

    let handler = ExperienceHandler::new(repo);
    handler.reload().await.expect("reload failed");

    handler.delete(doomed_id).await.expect("delete failed");

    let remaining = handler.current();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept_id);
}

#[actix_rt::test]
async fn experience_delete_failure_leaves_list_unchanged() {
    let rows = vec![experience("Globex"), experience("Initech")];
    let target = rows[1].id;

    let mut repo = MockExperienceRepository::new();
    let listed = rows.clone();
    repo.expect_list_experiences()
        .times(1)
        .returning(move || Ok(listed.clone()));
    repo.expect_delete_experience()
        .times(1)
        .returning(|_| Err(AppError::write_failed("delete experience", "row is locked")));

    let handler = ExperienceHandler::new(repo);
    handler.reload().await.expect("reload failed");

    let result = handler.delete(target).await;
    assert!(matches!(result, Err(AppError::WriteFailed { .. })));
    assert_eq!(handler.current().len(), 2);
}

// ───── Skills ───────────────────────────────────────────────────────

#[actix_rt::test]
async fn blank_skill_name_never_triggers_an_insert() {
    let mut repo = MockSkillRepository::new();
    repo.expect_insert_skill().never();

    let handler = SkillHandler::new(repo);

    let result = handler
        .create(NewSkill { skill: "  ".to_string() })
        .await;

    assert!(matches!(result, Err(AppError::ValidationError(_))));
    assert!(handler.current().is_empty());
}

#[actix_rt::test]
async fn skill_create_appends_the_server_returned_row() {
    let mut repo = MockSkillRepository::new();
    repo.expect_insert_skill()
        .withf(|payload| payload.skill == "Rust")
        .times(1)
        .returning(|_| Ok(skill("Rust")));

    let handler = SkillHandler::new(repo);

    let created = handler
        .create(NewSkill { skill: "  Rust  ".to_string() })
        .await
        .expect("create failed");

    assert_eq!(created.skill.as_deref(), Some("Rust"));

    let listed = handler.current();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
}

#[actix_rt::test]
async fn skill_rename_patches_the_local_row() {
    let existing = skill("Pyton");
    let id = existing.id;

    let mut repo = MockSkillRepository::new();
    repo.expect_list_skills()
        .times(1)
        .returning(move || Ok(vec![existing.clone()]));
    repo.expect_update_skill()
        .withf(move |update_id, payload| *update_id == id && payload.skill == "Python")
        .times(1)
        .returning(|_, _| Ok(()));

    let handler = SkillHandler::new(repo);
    handler.reload().await.expect("reload failed");

    let listed = handler
        .rename(id, NewSkill { skill: "Python".to_string() })
        .await
        .expect("rename failed");

    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].skill.as_deref(), Some("Python"));
}

#[actix_rt::test]
async fn skill_delete_failure_keeps_the_row() {
    let existing = skill("Rust");
    let id = existing.id;

    let mut repo = MockSkillRepository::new();
    repo.expect_list_skills()
        .times(1)
        .returning(move || Ok(vec![existing.clone()]));
    repo.expect_delete_skill()
        .times(1)
        .returning(|_| Err(AppError::write_failed("delete skill", "still referenced")));

    let handler = SkillHandler::new(repo);
    handler.reload().await.expect("reload failed");

    let result = handler.delete(id).await;
    assert!(matches!(result, Err(AppError::WriteFailed { .. })));
    assert_eq!(handler.current().len(), 1);
}

// ───── Shared list mechanics ────────────────────────────────────────

#[test]
fn in_flight_flag_rejects_concurrent_writes() {
    let list: ContentList<Skill> = ContentList::new();

    let guard = list.begin_write().expect("first claim failed");
    assert!(list.is_saving());

    assert!(matches!(list.begin_write(), Err(AppError::SaveInProgress)));

    drop(guard);
    assert!(!list.is_saving());
    assert!(list.begin_write().is_ok());
}
