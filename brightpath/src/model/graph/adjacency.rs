/// directed adjacency entry. each undirected input edge produces one in each direction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Adjacency {
    pub dst: usize,
    pub time: f64,
}
