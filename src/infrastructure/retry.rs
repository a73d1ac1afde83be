//! 有界重试
//!
//! 页面重新渲染会让已定位的元素引用失效，这类失败是瞬时的，
//! 统一在这里按配置的次数重试，而不是在各个调用点各写一份

use crate::error::{AppError, AppResult, PageError};
use std::future::Future;
use tracing::warn;

/// 对元素失效错误进行最多 `limit` 次额外尝试
///
/// 其他错误不重试，直接返回
pub async fn retry_on_stale<T, F, Fut>(limit: usize, mut op: F) -> AppResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = AppResult<T>>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Err(AppError::Page(PageError::StaleElement { selector, .. })) if attempt < limit => {
                attempt += 1;
                warn!(
                    "元素引用已失效 ({}), 重新定位后重试 {}/{}",
                    selector, attempt, limit
                );
            }
            other => return other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::io;

    fn stale() -> AppError {
        AppError::stale_element(
            ".buttons-csv",
            io::Error::new(io::ErrorKind::Other, "node detached"),
        )
    }

    #[test]
    fn test_succeeds_after_one_stale() {
        let calls = Cell::new(0);
        let result: AppResult<u32> = tokio_test::block_on(retry_on_stale(1, || {
            calls.set(calls.get() + 1);
            let attempt = calls.get();
            async move {
                if attempt == 1 {
                    Err(stale())
                } else {
                    Ok(7)
                }
            }
        }));

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_exhausts_retry_limit() {
        let calls = Cell::new(0);
        let result: AppResult<u32> = tokio_test::block_on(retry_on_stale(1, || {
            calls.set(calls.get() + 1);
            async { Err(stale()) }
        }));

        assert!(matches!(
            result,
            Err(AppError::Page(PageError::StaleElement { .. }))
        ));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_other_errors_not_retried() {
        let calls = Cell::new(0);
        let result: AppResult<u32> = tokio_test::block_on(retry_on_stale(3, || {
            calls.set(calls.get() + 1);
            async {
                Err(AppError::element_not_found(
                    ".buttons-csv",
                    std::time::Duration::from_secs(10),
                ))
            }
        }));

        assert!(matches!(
            result,
            Err(AppError::Page(PageError::ElementNotFound { .. }))
        ));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_zero_limit_fails_immediately() {
        let calls = Cell::new(0);
        let result: AppResult<u32> = tokio_test::block_on(retry_on_stale(0, || {
            calls.set(calls.get() + 1);
            async { Err(stale()) }
        }));

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }
}
