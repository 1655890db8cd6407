use pest::Parser;
use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "query/grammar.pest"] // relative to src
struct QueryPairs;

pub(crate) type Pair<'a> = pest::iterators::Pair<'a, Rule>;
pub(crate) type Pairs<'a> = pest::iterators::Pairs<'a, Rule>;
pub(crate) type Error = pest::error::Error<Rule>;

/// Parses a single query. The grammar accepts every input, so an `Err` here means the grammar itself is broken.
pub(crate) fn parse_query(query_text: &str) -> Result<Pairs<'_>, Box<Error>> {
    QueryPairs::parse(Rule::top, query_text).map_err(Box::new)
}
