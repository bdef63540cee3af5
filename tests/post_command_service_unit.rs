// tests/post_command_service_unit.rs
use std::sync::Arc;

mod support;

use support::{DummyClock, InMemoryPostRepo, PostBuilder, build_services, build_services_with};
use weebapi::application::commands::posts::{
    CreatePostCommand, DeletePostCommand, UpdatePostCommand,
};
use weebapi::application::error::ApplicationError;
use weebapi::application::queries::posts::{GetPostBySlugQuery, ListPostsQuery};
use weebapi::domain::errors::DomainError;
use weebapi::domain::post::Category;

fn post(title: &str) -> CreatePostCommand {
    CreatePostCommand::builder()
        .title(title)
        .content("Some content")
        .build()
        .unwrap()
}

#[tokio::test]
async fn colliding_titles_get_increasing_suffixes() {
    let ctx = build_services();
    let commands = &ctx.services.post_commands;

    let first = commands.create_post(post("Hello World")).await.unwrap();
    let second = commands.create_post(post("Hello World!!")).await.unwrap();
    let third = commands.create_post(post("hello, world?")).await.unwrap();

    assert_eq!(first.slug, "hello-world");
    assert_eq!(second.slug, "hello-world-2");
    assert_eq!(third.slug, "hello-world-3");
    assert_eq!(second.url, "/api/posts/hello-world-2/");
}

#[tokio::test]
async fn suffix_skips_to_first_free_candidate() {
    let ctx = build_services();
    ctx.posts.seed(PostBuilder::new().id(100).title("A").slug("my-post").build());
    ctx.posts.seed(PostBuilder::new().id(101).title("B").slug("my-post-2").build());
    ctx.posts.seed(PostBuilder::new().id(102).title("C").slug("my-post-4").build());
    // Shares the prefix text but not the `my-post-` boundary.
    ctx.posts.seed(PostBuilder::new().id(103).title("D").slug("my-posting").build());

    let created = ctx
        .services
        .post_commands
        .create_post(post("My Post"))
        .await
        .unwrap();
    assert_eq!(created.slug, "my-post-3");
}

#[tokio::test]
async fn punctuation_only_title_is_rejected() {
    let ctx = build_services();
    let err = ctx
        .services
        .post_commands
        .create_post(post("!!!"))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
    assert_eq!(ctx.posts.insert_attempts(), 0);
}

#[tokio::test]
async fn defaults_are_applied_on_create() {
    let ctx = build_services();
    let created = ctx
        .services
        .post_commands
        .create_post(post("Defaults"))
        .await
        .unwrap();

    assert_eq!(created.category, Category::Autre);
    assert_eq!(created.author, "Anonyme");
    assert!(created.is_published);
    assert_eq!(created.read_time, 0);
    assert_eq!(created.excerpt, "");
}

#[tokio::test]
async fn slug_claimed_between_probe_and_insert_is_reprobed() {
    let repo = Arc::new(InMemoryPostRepo::new().with_races(1));
    let ctx = build_services_with(repo, Arc::new(DummyClock), 5);

    let created = ctx
        .services
        .post_commands
        .create_post(post("Hello World"))
        .await
        .unwrap();

    assert_eq!(created.slug, "hello-world-2");
    assert_eq!(ctx.posts.insert_attempts(), 2);
    let mut slugs = ctx.posts.slugs();
    slugs.sort();
    assert_eq!(slugs, vec!["hello-world", "hello-world-2"]);
}

#[tokio::test]
async fn persistent_slug_conflicts_stop_after_max_attempts() {
    let repo = Arc::new(InMemoryPostRepo::new().with_races(10));
    let ctx = build_services_with(repo, Arc::new(DummyClock), 3);

    let err = ctx
        .services
        .post_commands
        .create_post(post("Hello World"))
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Conflict(_)));
    assert_eq!(ctx.posts.insert_attempts(), 3);
}

#[tokio::test]
async fn duplicate_title_is_a_conflict_without_retry() {
    let ctx = build_services();
    let commands = &ctx.services.post_commands;
    commands.create_post(post("Same Title")).await.unwrap();

    let err = commands.create_post(post("Same Title")).await.unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Conflict(_))
    ));
    assert_eq!(ctx.posts.insert_attempts(), 2);
}

#[tokio::test]
async fn requested_slug_is_validated_and_not_suffixed() {
    let ctx = build_services();
    let commands = &ctx.services.post_commands;

    let explicit = CreatePostCommand::builder()
        .title("Anything")
        .slug("custom-slug")
        .content("c")
        .build()
        .unwrap();
    assert_eq!(commands.create_post(explicit).await.unwrap().slug, "custom-slug");

    let taken = CreatePostCommand::builder()
        .title("Anything Else")
        .slug("custom-slug")
        .content("c")
        .build()
        .unwrap();
    assert!(matches!(
        commands.create_post(taken).await.unwrap_err(),
        ApplicationError::Conflict(_)
    ));

    let malformed = CreatePostCommand::builder()
        .title("Third")
        .slug("Not A Slug")
        .content("c")
        .build()
        .unwrap();
    assert!(matches!(
        commands.create_post(malformed).await.unwrap_err(),
        ApplicationError::Domain(DomainError::Validation(_))
    ));
}

#[tokio::test]
async fn blank_requested_slug_falls_back_to_derivation() {
    let ctx = build_services();
    let command = CreatePostCommand::builder()
        .title("Derived Anyway")
        .slug("   ")
        .content("c")
        .build()
        .unwrap();

    let created = ctx.services.post_commands.create_post(command).await.unwrap();
    assert_eq!(created.slug, "derived-anyway");
}

#[tokio::test]
async fn updating_the_title_keeps_the_slug() {
    let ctx = build_services();
    let created = ctx
        .services
        .post_commands
        .create_post(post("Original Title"))
        .await
        .unwrap();

    let updated = ctx
        .services
        .post_commands
        .update_post(UpdatePostCommand {
            slug: created.slug.clone(),
            title: Some("Completely Different".into()),
            category: Some(Category::Technologie),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.title, "Completely Different");
    assert_eq!(updated.slug, "original-title");
    assert_eq!(updated.category, Category::Technologie);

    let fetched = ctx
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery {
            slug: "original-title".into(),
        })
        .await
        .unwrap();
    assert_eq!(fetched.title, "Completely Different");
}

#[tokio::test]
async fn update_and_delete_of_unknown_posts_are_not_found() {
    let ctx = build_services();
    let commands = &ctx.services.post_commands;

    let update = commands
        .update_post(UpdatePostCommand {
            slug: "missing".into(),
            title: Some("x".into()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(update, ApplicationError::NotFound(_)));

    let delete = commands
        .delete_post(DeletePostCommand {
            slug: "Not a slug".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(delete, ApplicationError::NotFound(_)));
}

#[tokio::test]
async fn deleted_slug_becomes_available_again() {
    let ctx = build_services();
    let commands = &ctx.services.post_commands;

    commands.create_post(post("Reuse Me")).await.unwrap();
    commands
        .delete_post(DeletePostCommand {
            slug: "reuse-me".into(),
        })
        .await
        .unwrap();

    let again = commands.create_post(post("Reuse Me")).await.unwrap();
    assert_eq!(again.slug, "reuse-me");
}

#[tokio::test]
async fn listing_filters_on_published_flag() {
    let ctx = build_services();
    ctx.posts.seed(PostBuilder::new().id(100).title("Live").slug("live").build());
    ctx.posts
        .seed(PostBuilder::new().id(101).title("Draft").slug("draft").draft().build());

    let published = ctx
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            published: Some(true),
            limit: 20,
            cursor: None,
        })
        .await
        .unwrap();
    assert_eq!(published.items.len(), 1);
    assert_eq!(published.items[0].slug, "live");

    let all = ctx
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            published: None,
            limit: 1,
            cursor: None,
        })
        .await
        .unwrap();
    assert_eq!(all.items.len(), 1);
    assert!(all.has_more);

    let rest = ctx
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            published: None,
            limit: 1,
            cursor: all.next_cursor.clone(),
        })
        .await
        .unwrap();
    assert_eq!(rest.items.len(), 1);
    assert_ne!(rest.items[0].slug, all.items[0].slug);
    assert!(!rest.has_more);
}
