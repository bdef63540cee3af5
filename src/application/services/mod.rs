// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{messages::MessageCommandService, posts::PostCommandService},
        ports::{sentiment::SentimentScorer, time::Clock, util::SlugGenerator},
        queries::{
            messages::MessageQueryService, posts::PostQueryService,
            satisfaction::SatisfactionQueryService,
        },
    },
    domain::{
        message::MessageRepository,
        post::{PostReadRepository, PostWriteRepository, services::PostSlugService},
    },
};

pub struct ApplicationServices {
    pub post_commands: Arc<PostCommandService>,
    pub post_queries: Arc<PostQueryService>,
    pub message_commands: Arc<MessageCommandService>,
    pub message_queries: Arc<MessageQueryService>,
    pub satisfaction: Arc<SatisfactionQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        post_write_repo: Arc<dyn PostWriteRepository>,
        post_read_repo: Arc<dyn PostReadRepository>,
        message_repo: Arc<dyn MessageRepository>,
        scorer: Arc<dyn SentimentScorer>,
        clock: Arc<dyn Clock>,
        slugger: Arc<dyn SlugGenerator>,
        slug_max_attempts: u32,
    ) -> Self {
        let slug_service = Arc::new(PostSlugService::new(
            Arc::clone(&post_read_repo),
            Arc::clone(&slugger),
        ));

        let post_commands = Arc::new(
            PostCommandService::new(
                Arc::clone(&post_write_repo),
                Arc::clone(&post_read_repo),
                Arc::clone(&slug_service),
                Arc::clone(&clock),
            )
            .with_slug_max_attempts(slug_max_attempts),
        );
        let post_queries = Arc::new(PostQueryService::new(Arc::clone(&post_read_repo)));

        let message_commands = Arc::new(MessageCommandService::new(
            Arc::clone(&message_repo),
            Arc::clone(&scorer),
            Arc::clone(&clock),
        ));
        let message_queries = Arc::new(MessageQueryService::new(Arc::clone(&message_repo)));
        let satisfaction = Arc::new(SatisfactionQueryService::new(Arc::clone(&scorer)));

        Self {
            post_commands,
            post_queries,
            message_commands,
            message_queries,
            satisfaction,
        }
    }
}
