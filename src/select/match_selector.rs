/// MatchSelector is the predicate half of a selector: whether a single item matches, independent of where it sits in
/// the document.
pub(crate) trait MatchSelector<I> {
    fn matches(&self, item: &I) -> bool;

    /// All the matching items, in their original order.
    fn find_matches<'a>(&self, items: &'a [I]) -> impl Iterator<Item = &'a I>
    where
        Self: Sized,
    {
        items.iter().filter(move |item| self.matches(item))
    }
}
