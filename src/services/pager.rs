//! 分页服务 - 业务能力层
//!
//! 只负责"切片"，不关心越界时该返回 404 还是空列表，那是接口的决定

/// 默认每页数量
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// 分页器
///
/// 第 `page` 页（从 1 开始）对应 `items[(page-1)*size .. page*size]`，超出范围的部分被截掉
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pager {
    page_size: usize,
}

impl Pager {
    /// 创建分页器，`page_size` 为 0 时使用默认值
    pub fn new(page_size: usize) -> Self {
        let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
        Self { page_size }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// 取第 `page` 页
    ///
    /// `page` 为 0 或超出范围时返回空切片，不会报错
    pub fn paginate<'a, T>(&self, items: &'a [T], page: usize) -> &'a [T] {
        if page == 0 {
            return &[];
        }

        let start = match (page - 1).checked_mul(self.page_size) {
            Some(start) if start < items.len() => start,
            _ => return &[],
        };
        let end = start.saturating_add(self.page_size).min(items.len());

        &items[start..end]
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
