use crate::{
    api::{attendance, leave, user},
    auth::{handlers, middleware::auth_middleware},
    config::Config,
};
use actix_governor::{
    Governor, GovernorConfigBuilder, PeerIpKeyExtractor, governor::middleware::NoOpMiddleware,
};
use actix_web::{middleware::from_fn, web};
use std::sync::Arc;

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    // Helper to build per-route limiter
    fn build_limiter(requests_per_min: u32) -> Governor<PeerIpKeyExtractor, NoOpMiddleware> {
        let per_ms = if requests_per_min == 0 {
            1
        } else {
            60_000 / requests_per_min as u64
        };
        let cfg = GovernorConfigBuilder::default()
            .per_millisecond(per_ms)
            .burst_size(requests_per_min)
            .key_extractor(PeerIpKeyExtractor)
            .finish()
            .unwrap();
        Governor::new(&cfg)
    }

    let login_limiter = Arc::new(build_limiter(config.rate_login_per_min));
    let signup_limiter = Arc::new(build_limiter(config.rate_signup_per_min));
    let reset_limiter = Arc::new(build_limiter(config.rate_reset_per_min));
    let protected_limiter = Arc::new(build_limiter(config.rate_protected_per_min));

    cfg.service(
        web::scope(&config.api_prefix)
            // Public routes
            .service(
                web::resource("/signup")
                    .wrap(signup_limiter)
                    .route(web::post().to(handlers::signup)),
            )
            .service(
                web::resource("/login")
                    .wrap(login_limiter)
                    .route(web::post().to(handlers::login)),
            )
            .service(
                web::resource("/reset-password")
                    .wrap(reset_limiter)
                    .route(web::post().to(handlers::reset_password)),
            )
            // Protected routes
            .service(
                web::scope("")
                    .wrap(from_fn(auth_middleware)) // session validation
                    .wrap(protected_limiter) // rate limiting
                    .service(web::resource("/profile").route(web::get().to(user::get_profile)))
                    .service(web::resource("/users").route(web::get().to(user::list_users)))
                    .service(
                        web::resource("/users/{id}").route(web::put().to(user::update_user)),
                    )
                    .service(
                        web::scope("/attendance")
                            .service(
                                web::resource("")
                                    .route(web::get().to(attendance::list_attendance)),
                            )
                            .service(
                                web::resource("/checkin")
                                    .route(web::post().to(attendance::check_in)),
                            )
                            .service(
                                web::resource("/checkout")
                                    .route(web::put().to(attendance::check_out)),
                            ),
                    )
                    .service(
                        web::scope("/leaves")
                            .service(
                                web::resource("")
                                    .route(web::post().to(leave::apply_leave))
                                    .route(web::get().to(leave::list_leaves)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .route(web::put().to(leave::set_leave_status)),
                            ),
                    ),
            ),
    );
}
