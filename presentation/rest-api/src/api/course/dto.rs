use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::catalog::details::Sellable;
use business::domain::catalog::use_cases::list::DetailsPage;
use business::domain::course::model::{Course, CoursePatch, NewCourse};

use crate::api::catalog::dto::{MediaResponse, ProductResponse};

#[derive(Debug, Clone, Object)]
pub struct CreateCourseRequest {
    /// Decimal price, e.g. "49.90"
    pub price: String,
    /// Course name (3 to 120 characters)
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub short_description: Option<String>,
    pub description: String,
    /// Total course length in hours (1 to 1000)
    pub duration_hours: i32,
    /// Days of access granted after purchase (1 to 3650)
    pub access_days: i32,
}

impl CreateCourseRequest {
    pub fn into_parts(self) -> (String, NewCourse) {
        (
            self.price,
            NewCourse {
                name: self.name,
                short_description: self.short_description,
                description: self.description,
                duration_hours: self.duration_hours,
                access_days: self.access_days,
            },
        )
    }
}

/// Every field is optional; absent fields are left untouched.
#[derive(Debug, Clone, Object)]
pub struct UpdateCourseRequest {
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// An empty string clears the short description
    #[oai(skip_serializing_if_is_none)]
    pub short_description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub duration_hours: Option<i32>,
    #[oai(skip_serializing_if_is_none)]
    pub access_days: Option<i32>,
}

impl UpdateCourseRequest {
    pub fn into_parts(self) -> (Option<String>, CoursePatch) {
        (
            self.price,
            CoursePatch {
                name: self.name,
                short_description: self.short_description,
                description: self.description,
                duration_hours: self.duration_hours,
                access_days: self.access_days,
            },
        )
    }
}

#[derive(Debug, Clone, Object)]
pub struct CourseResponse {
    pub id: String,
    pub name: String,
    #[oai(skip_serializing_if_is_none)]
    pub short_description: Option<String>,
    pub description: String,
    pub duration_hours: i32,
    pub access_days: i32,
    pub in_stock: bool,
    #[oai(skip_serializing_if_is_none)]
    pub deleted_at: Option<DateTime<Utc>>,
    pub media: MediaResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        Self {
            id: course.id.to_string(),
            name: course.name,
            short_description: course.short_description,
            description: course.description,
            duration_hours: course.duration_hours,
            access_days: course.access_days,
            in_stock: course.in_stock,
            deleted_at: course.deleted_at,
            media: course.media.into(),
            created_at: course.created_at,
            updated_at: course.updated_at,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CourseWithProductResponse {
    pub course: CourseResponse,
    pub product: ProductResponse,
}

impl From<Sellable<Course>> for CourseWithProductResponse {
    fn from(sellable: Sellable<Course>) -> Self {
        Self {
            course: sellable.details.into(),
            product: sellable.product.into(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CoursePageResponse {
    pub items: Vec<CourseResponse>,
    /// Rows matching the scope across all pages
    pub total: u64,
}

impl From<DetailsPage<Course>> for CoursePageResponse {
    fn from(page: DetailsPage<Course>) -> Self {
        Self {
            items: page.items.into_iter().map(Into::into).collect(),
            total: page.total,
        }
    }
}
