//! 学生照片地址

/// 生成学生照片地址的策略
pub trait PhotoUrlStrategy: Send + Sync {
    fn photo_url(&self, reg_no: &str) -> String;
}

/// 按模板生成占位图地址，`{reg_no}` 替换为学号
#[derive(Debug, Clone)]
pub struct TemplatePhotoUrl {
    template: String,
}

impl TemplatePhotoUrl {
    pub const DEFAULT_TEMPLATE: &'static str = "https://picsum.photos/seed/{reg_no}/200/200";

    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }
}

impl Default for TemplatePhotoUrl {
    fn default() -> Self {
        Self::new(Self::DEFAULT_TEMPLATE)
    }
}

impl PhotoUrlStrategy for TemplatePhotoUrl {
    fn photo_url(&self, reg_no: &str) -> String {
        self.template.replace("{reg_no}", reg_no)
    }
}
