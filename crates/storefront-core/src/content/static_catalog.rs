use super::{Product, ProductCatalog, ServiceOffer};

/// Products shipped with the page.
pub const STOREFRONT_PRODUCTS: [Product<'static>; 5] = [
    Product {
        id: 1,
        name: "متجر أزياء النخبة",
        category: "متجر إلكتروني",
        description: "متجر إلكتروني متكامل لبيع الأزياء مع سلة مشتريات وصفحات منتجات تفصيلية.",
        goal: "زيادة المبيعات عبر تجربة شراء سريعة وسهلة على جميع الأجهزة.",
        technologies: &["HTML5", "CSS3", "JavaScript", "Responsive Design"],
        features: &[
            "عرض المنتجات حسب التصنيفات",
            "سلة مشتريات تفاعلية",
            "تصميم متجاوب بالكامل",
            "صفحات منتجات بمعرض صور",
        ],
        images: &[
            "public/projects/fashion-store-1.jpg",
            "public/projects/fashion-store-2.jpg",
            "public/projects/fashion-store-3.jpg",
        ],
        live_demo: "https://awdd-store.github.io/fashion-store/",
    },
    Product {
        id: 2,
        name: "إطلاقة تطبيق المهام",
        category: "صفحة هبوط",
        description: "صفحة هبوط تعريفية لتطبيق إدارة مهام تركز على تحويل الزوار إلى مستخدمين.",
        goal: "رفع معدل التسجيل في التطبيق من خلال رسالة واضحة ودعوة مباشرة للإجراء.",
        technologies: &["HTML5", "CSS3", "JavaScript"],
        features: &[
            "قسم مزايا بحركات ظهور",
            "جدول أسعار واضح",
            "نموذج اشتراك في النشرة البريدية",
        ],
        images: &[
            "public/projects/task-landing-1.jpg",
            "public/projects/task-landing-2.jpg",
        ],
        live_demo: "https://awdd-store.github.io/task-landing/",
    },
    Product {
        id: 3,
        name: "شركة البناء الحديث",
        category: "موقع أعمال",
        description: "موقع تعريفي لشركة مقاولات يعرض الخدمات والمشاريع المنفذة وفريق العمل.",
        goal: "بناء الثقة مع العملاء وتسهيل طلب عروض الأسعار.",
        technologies: &["HTML5", "CSS3", "JavaScript", "Font Awesome"],
        features: &[
            "معرض مشاريع منفذة",
            "صفحة خدمات تفصيلية",
            "نموذج طلب عرض سعر",
            "خريطة موقع الشركة",
        ],
        images: &[
            "public/projects/construction-1.jpg",
            "public/projects/construction-2.jpg",
            "public/projects/construction-3.jpg",
            "public/projects/construction-4.jpg",
        ],
        live_demo: "https://awdd-store.github.io/construction/",
    },
    Product {
        id: 4,
        name: "ملف المصمم الشخصي",
        category: "موقع شخصي",
        description: "موقع شخصي لمصمم جرافيك يعرض أعماله ومهاراته وطرق التواصل معه.",
        goal: "إبراز هوية المصمم وجذب عملاء جدد.",
        technologies: &["HTML5", "CSS3", "JavaScript"],
        features: &["معرض أعمال", "شريط مهارات متحرك", "روابط التواصل الاجتماعي"],
        images: &[],
        live_demo: "https://awdd-store.github.io/designer-portfolio/",
    },
    Product {
        id: 5,
        name: "مطعم البيت الشامي",
        category: "موقع مطعم",
        description: "موقع لمطعم يعرض قائمة الطعام والعروض اليومية مع إمكانية الحجز.",
        goal: "تسهيل الحجز وعرض قائمة الطعام بشكل جذاب.",
        technologies: &["HTML5", "CSS3", "JavaScript", "Google Maps"],
        features: &[
            "قائمة طعام مصنفة",
            "نموذج حجز طاولة",
            "عرض ساعات العمل والموقع",
        ],
        images: &[
            "public/projects/restaurant-1.jpg",
            "public/projects/restaurant-2.jpg",
        ],
        live_demo: "https://awdd-store.github.io/restaurant/",
    },
];

/// Offers listed in the services section.
pub const STOREFRONT_SERVICES: [ServiceOffer<'static>; 4] = [
    ServiceOffer {
        icon: "fas fa-rocket",
        title: "صفحات الهبوط",
        description: "صفحات سريعة ومقنعة تحول زوارك إلى عملاء.",
    },
    ServiceOffer {
        icon: "fas fa-shopping-cart",
        title: "المتاجر الإلكترونية",
        description: "متاجر متكاملة لعرض منتجاتك وبيعها بسهولة.",
    },
    ServiceOffer {
        icon: "fas fa-building",
        title: "مواقع الأعمال",
        description: "واجهة احترافية لشركتك على الإنترنت.",
    },
    ServiceOffer {
        icon: "fas fa-mobile-alt",
        title: "تصميم متجاوب",
        description: "تجربة متناسقة على الجوال والحاسوب.",
    },
];

pub fn default_storefront_catalog() -> StaticCatalog<'static> {
    StaticCatalog::new(&STOREFRONT_PRODUCTS, &STOREFRONT_SERVICES)
}

/// Static in-memory catalog.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct StaticCatalog<'a> {
    products: &'a [Product<'a>],
    services: &'a [ServiceOffer<'a>],
}

impl<'a> StaticCatalog<'a> {
    pub const fn new(products: &'a [Product<'a>], services: &'a [ServiceOffer<'a>]) -> Self {
        Self { products, services }
    }

    /// Catalog used when no product data was supplied.
    pub const fn empty() -> Self {
        Self {
            products: &[],
            services: &[],
        }
    }
}

impl ProductCatalog for StaticCatalog<'_> {
    fn product_count(&self) -> usize {
        self.products.len()
    }

    fn product_at(&self, index: usize) -> Option<Product<'_>> {
        self.products.get(index).copied()
    }

    fn service_count(&self) -> usize {
        self.services.len()
    }

    fn service_at(&self, index: usize) -> Option<ServiceOffer<'_>> {
        self.services.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PLACEHOLDER_IMAGE;

    #[test]
    fn default_catalog_exposes_products_and_services() {
        let catalog = default_storefront_catalog();
        assert_eq!(catalog.product_count(), STOREFRONT_PRODUCTS.len());
        assert_eq!(catalog.service_count(), STOREFRONT_SERVICES.len());
        assert!(catalog.product_at(catalog.product_count()).is_none());
        assert!(!catalog.is_empty());
    }

    #[test]
    fn product_ids_are_unique() {
        for (i, a) in STOREFRONT_PRODUCTS.iter().enumerate() {
            for b in &STOREFRONT_PRODUCTS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn image_less_product_falls_back_to_placeholder() {
        let catalog = default_storefront_catalog();
        let product = (0..catalog.product_count())
            .filter_map(|i| catalog.product_at(i))
            .find(|p| p.images.is_empty())
            .unwrap();

        assert_eq!(product.cover_image(), None);
        assert_eq!(product.gallery_len(), 1);
        assert_eq!(product.gallery_image(0), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn empty_catalog_has_nothing() {
        let catalog = StaticCatalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.product_at(0).is_none());
        assert!(catalog.service_at(0).is_none());
    }
}
