/// Slice `[(page_number - 1) * page_size, page_number * page_size)`.
///
/// A page past the end is empty. `page_number` 0 is treated as 1.
pub fn paginate<T>(items: &[T], page_number: usize, page_size: usize) -> &[T] {
    let start = page_number.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
