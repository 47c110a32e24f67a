//! 模板渲染
//!
//! 模板在编译期嵌入，运行时不依赖工作目录。

use tera::{Context, Tera};
use tracing::debug;

use crate::core::error::Result;

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("top.html", include_str!("../../templates/top.html")),
    (
        "product_list.html",
        include_str!("../../templates/product_list.html"),
    ),
    (
        "product_detail.html",
        include_str!("../../templates/product_detail.html"),
    ),
    (
        "product_form.html",
        include_str!("../../templates/product_form.html"),
    ),
    (
        "product_confirm_delete.html",
        include_str!("../../templates/product_confirm_delete.html"),
    ),
];

pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;

        debug!(count = TEMPLATES.len(), "Templates loaded");

        Ok(Self { tera })
    }

    pub fn render(&self, template_name: &str, context: &Context) -> Result<String> {
        Ok(self.tera.render(template_name, context)?)
    }
}
