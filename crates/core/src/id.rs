//! # Id Module
//!
//! AccountIdGenerator - cấp số tài khoản duy nhất, tăng dần.
//! Generator là một giá trị được sở hữu và inject vào nơi cần dùng
//! (không dùng static toàn cục), để test có thể tạo generator độc lập.

use crate::error::{CoreError, CoreResult};
use std::sync::atomic::{AtomicU64, Ordering};

/// Số tài khoản đầu tiên được cấp
pub const FIRST_ACCOUNT_ID: u64 = 1;

/// Bộ cấp số tài khoản.
///
/// Counter cập nhật nguyên tử (`fetch_update`) nên một generator có thể được
/// chia sẻ giữa nhiều thread mà vẫn đảm bảo id không trùng.
///
/// `u64::MAX` không bao giờ được cấp: khi counter chạm tới đó, `next()` trả về
/// `CoreError::IdsExhausted` thay vì quay vòng về 0.
#[derive(Debug)]
pub struct AccountIdGenerator {
    next: AtomicU64,
}

impl AccountIdGenerator {
    /// Tạo generator bắt đầu từ 1
    pub fn new() -> Self {
        Self::starting_from(FIRST_ACCOUNT_ID)
    }

    /// Tạo generator bắt đầu từ `start` (tối thiểu là 1)
    pub fn starting_from(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start.max(FIRST_ACCOUNT_ID)),
        }
    }

    /// Tạo generator tiếp nối sau các id đã tồn tại: `max(ids) + 1`
    pub fn resume_after<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let start = ids
            .into_iter()
            .max()
            .map_or(FIRST_ACCOUNT_ID, |max| max.saturating_add(1));
        Self::starting_from(start)
    }

    /// Cấp id mới, lớn hơn mọi id đã cấp trước đó
    ///
    /// # Errors
    /// `IdsExhausted` khi không còn id nào lớn hơn id cuối cùng.
    pub fn next(&self) -> CoreResult<u64> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_add(1))
            .map_err(|_| CoreError::IdsExhausted)
    }

    /// Xem id sẽ được cấp tiếp theo (không tiêu thụ)
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl Default for AccountIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
