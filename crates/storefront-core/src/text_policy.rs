//! User-facing strings and the label policies shared by view and controller.

use crate::form::ProjectType;

pub const EMPTY_CATALOG_NOTICE: &str = "لا توجد مشاريع متاحة حالياً";
pub const SUBMIT_LABEL: &str = "إرسال الرسالة";
pub const SUBMITTING_LABEL: &str = "جاري الإرسال...";
pub const SUBMIT_SUCCESS_MESSAGE: &str = "تم إرسال رسالتك بنجاح! سنتواصل معك قريباً.";
pub const DETAILS_LABEL: &str = "التفاصيل";
pub const VIEW_LABEL: &str = "مشاهدة";
pub const REQUEST_SIMILAR_LABEL: &str = "اطلب موقعاً مشابهاً";

/// Maps a product category label to the contact form's project type.
pub fn project_type_for_category(category: &str) -> ProjectType {
    ProjectType::ALL
        .into_iter()
        .filter(|kind| *kind != ProjectType::Other)
        .find(|kind| kind.label() == category.trim())
        .unwrap_or(ProjectType::Other)
}

/// Message prefilled when a visitor asks for a site like `product_name`.
pub fn request_message(product_name: &str) -> String {
    format!("أرغب في طلب موقع مشابه لـ \"{product_name}\"")
}
