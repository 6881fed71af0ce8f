//! Batch tagging for long lists.
//!
//! The first `page_size` items are always visible (batch 0). The rest are
//! hidden and tagged `data-batch="n"`, `batch_size` items per batch, and a
//! "Show more" control follows the list.

use crate::render::html::escape_html;
use crate::render::types::{Handle, RenderOptions};

pub const SHOW_MORE_LABEL: &str = "Show more";
pub const SHOW_LESS_LABEL: &str = "Show less";

/// Batch number of the item at `index` (0 = initially visible).
pub fn batch_of(index: usize, options: &RenderOptions) -> u32 {
    let page_size = options.page_size.max(1);
    if index < page_size {
        0
    } else {
        ((index - page_size) / options.batch_size.max(1) + 1) as u32
    }
}

/// Number of hidden batches for a list of `len` items.
pub fn batch_count(len: usize, options: &RenderOptions) -> u32 {
    if len == 0 {
        0
    } else {
        batch_of(len - 1, options)
    }
}

/// Extra class and attributes for an item in `batch`.
pub fn item_attrs(batch: u32) -> (&'static str, String) {
    if batch == 0 {
        ("", String::new())
    } else {
        (
            " paginated",
            format!(" data-batch=\"{}\" style=\"display: none;\"", batch),
        )
    }
}

/// Trailing "Show more" row and its pager handle, when the list has hidden batches.
pub fn show_more_control(list_id: &str, batches: u32) -> Option<(String, Handle)> {
    if batches == 0 {
        return None;
    }
    let html = format!(
        r#"
            <li class="show-more-row">
                <button class="show-more-btn" data-list="{}" data-batches="{}">{}</button>
            </li>
        "#,
        escape_html(list_id),
        batches,
        SHOW_MORE_LABEL
    );
    Some((
        html,
        Handle::Pager {
            list: list_id.to_string(),
            batches,
        },
    ))
}
