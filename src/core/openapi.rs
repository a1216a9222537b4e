use utoipa::{Modify, OpenApi};

use crate::features::blogs::{dtos as blogs_dtos, handlers as blogs_handlers};
use crate::features::contacts::{dtos as contacts_dtos, handlers as contacts_handlers};
use crate::features::service_catalog::{dtos as services_dtos, handlers as services_handlers};
use crate::shared::query::Pagination;
use crate::shared::types::{ApiResponse, FieldError};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Services
        services_handlers::create_service,
        services_handlers::list_services,
        services_handlers::list_services_with_blogs,
        services_handlers::get_service,
        services_handlers::update_service,
        services_handlers::delete_service,
        // Blogs
        blogs_handlers::create_blog,
        blogs_handlers::list_blogs,
        blogs_handlers::get_blog,
        blogs_handlers::get_blog_by_slug,
        blogs_handlers::list_published_blogs_for_service,
        blogs_handlers::update_blog,
        blogs_handlers::update_blog_status,
        // Contacts
        contacts_handlers::create_contact,
        contacts_handlers::list_contacts,
        contacts_handlers::update_contact_status,
    ),
    components(
        schemas(
            // Shared
            FieldError,
            Pagination,
            // Services
            services_dtos::ServiceRequestDto,
            services_dtos::ServiceResponseDto,
            services_dtos::ServiceRef,
            ApiResponse<services_dtos::ServiceResponseDto>,
            ApiResponse<Vec<services_dtos::ServiceResponseDto>>,
            ApiResponse<Vec<services_dtos::ServiceRef>>,
            // Blogs
            blogs_dtos::BlogRequestDto,
            blogs_dtos::BlogStatusDto,
            blogs_dtos::BlogResponseDto,
            blogs_dtos::BlogDetailDto,
            ApiResponse<blogs_dtos::BlogResponseDto>,
            ApiResponse<blogs_dtos::BlogDetailDto>,
            ApiResponse<Vec<blogs_dtos::BlogDetailDto>>,
            // Contacts
            contacts_dtos::CreateContactDto,
            contacts_dtos::ContactStatusDto,
            contacts_dtos::ContactResponseDto,
            contacts_dtos::ContactDetailDto,
            ApiResponse<contacts_dtos::ContactResponseDto>,
            ApiResponse<contacts_dtos::ContactDetailDto>,
            ApiResponse<Vec<contacts_dtos::ContactDetailDto>>,
        )
    ),
    tags(
        (name = "services", description = "Service catalog"),
        (name = "blogs", description = "Blog posts addressed by id or slug"),
        (name = "contacts", description = "Contact requests from site visitors"),
    ),
    info(
        title = "Content Backend API",
        version = "0.1.0",
        description = "Services, blogs and contact requests",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
