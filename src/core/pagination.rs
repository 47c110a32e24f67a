//! 分页
//!
//! 页码来自查询参数，非法输入不会报错：
//! 不是整数或小于 1 时回到第 1 页，超过总页数时落到最后一页。

use serde::Serialize;
use std::num::IntErrorKind;
use std::ops::RangeInclusive;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("页码不是整数")]
    NotAnInteger,
    #[error("页码 {0} 超出范围")]
    Empty(i64),
}

/// 分页器，只关心总数和每页条数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: usize,
    per_page: usize,
}

impl Paginator {
    /// `per_page` 为 0 时按 1 处理
    pub fn new(count: usize, per_page: usize) -> Self {
        Self {
            count,
            per_page: per_page.max(1),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// 空表也有一页
    pub fn num_pages(&self) -> usize {
        self.count.div_ceil(self.per_page).max(1)
    }

    pub fn page_range(&self) -> RangeInclusive<usize> {
        1..=self.num_pages()
    }

    pub fn validate_number(&self, raw: &str) -> Result<usize, PageError> {
        let number = match raw.trim().parse::<i64>() {
            Ok(number) => number,
            Err(e) => match e.kind() {
                IntErrorKind::PosOverflow => i64::MAX,
                IntErrorKind::NegOverflow => i64::MIN,
                _ => return Err(PageError::NotAnInteger),
            },
        };

        match usize::try_from(number) {
            Ok(n) if (1..=self.num_pages()).contains(&n) => Ok(n),
            _ => Err(PageError::Empty(number)),
        }
    }

    pub fn clamp(&self, raw: Option<&str>) -> usize {
        let Some(raw) = raw else {
            return 1;
        };

        match self.validate_number(raw) {
            Ok(number) => number,
            Err(PageError::NotAnInteger) => 1,
            Err(PageError::Empty(number)) if number < 1 => 1,
            Err(PageError::Empty(_)) => self.num_pages(),
        }
    }

    /// 返回 `(offset, limit)`
    pub fn bounds(&self, number: usize) -> (usize, usize) {
        (number.saturating_sub(1) * self.per_page, self.per_page)
    }

    pub fn summary(&self) -> PaginatorSummary {
        PaginatorSummary {
            count: self.count,
            per_page: self.per_page,
            num_pages: self.num_pages(),
            page_range: self.page_range().collect(),
        }
    }
}

/// 模板中使用的分页器信息
#[derive(Debug, Clone, Serialize)]
pub struct PaginatorSummary {
    pub count: usize,
    pub per_page: usize,
    pub num_pages: usize,
    pub page_range: Vec<usize>,
}

/// 一页数据
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub num_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
    pub has_other_pages: bool,
    pub next_page_number: Option<usize>,
    pub previous_page_number: Option<usize>,
    /// 从 1 开始的首条序号，空页为 0
    pub start_index: usize,
    pub end_index: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, number: usize, paginator: &Paginator) -> Self {
        let num_pages = paginator.num_pages();
        let has_next = number < num_pages;
        let has_previous = number > 1;

        let (offset, limit) = paginator.bounds(number);
        let (start_index, end_index) = if paginator.count() == 0 {
            (0, 0)
        } else if number == num_pages {
            (offset + 1, paginator.count())
        } else {
            (offset + 1, offset + limit)
        };

        Self {
            items,
            number,
            num_pages,
            has_next,
            has_previous,
            has_other_pages: has_next || has_previous,
            next_page_number: has_next.then_some(number + 1),
            previous_page_number: has_previous.then(|| number - 1),
            start_index,
            end_index,
        }
    }
}
