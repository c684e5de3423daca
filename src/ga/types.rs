//! Policy traits for the genetic algorithm.
//!
//! Every generation runs the same fixed pipeline:
//!
//! 1. [`Sizer`] decides how many parents to draw from the population
//! 2. [`Selection`] draws them
//! 3. [`Matchmaker`] groups the parents into tuples of `P`
//! 4. [`Crossover`] turns each tuple into children
//! 5. [`Mutation`] perturbs each child before it is evaluated
//! 6. [`Replacement`] builds the next population from parents and children
//!
//! Closures implement every trait except [`Matchmaker`], whose groups are
//! produced lazily by an iterator borrowing the parents.

use super::runner::GeneticAlgorithm;
use crate::state::State;

/// Number of parents to select from a population of the given size.
///
/// Implemented for every `FnMut(usize) -> usize` closure.
pub trait Sizer {
    fn size(&mut self, population: usize) -> usize;
}

impl<F> Sizer for F
where
    F: FnMut(usize) -> usize,
{
    fn size(&mut self, population: usize) -> usize {
        self(population)
    }
}

/// Draws `n` parents from the population, usually with repetition.
///
/// Implemented for every `FnMut(usize, &[State<C>]) -> Vec<State<C>>` closure.
pub trait Selection<C> {
    fn select(&mut self, n: usize, population: &[State<C>]) -> Vec<State<C>>;
}

impl<C, F> Selection<C> for F
where
    F: FnMut(usize, &[State<C>]) -> Vec<State<C>>,
{
    fn select(&mut self, n: usize, population: &[State<C>]) -> Vec<State<C>> {
        self(n, population)
    }
}

/// Groups selected parents into mating tuples of `P` configurations.
pub trait Matchmaker<C, const P: usize> {
    /// Lazy sequence of parent groups.
    type Groups<'a>: Iterator<Item = [C; P]>
    where
        Self: 'a,
        C: 'a;

    /// May reorder `parents` in place.
    fn groups<'a>(&'a mut self, parents: &'a mut [State<C>]) -> Self::Groups<'a>;
}

/// Recombines a group of parent configurations into children.
///
/// Implemented for every `FnMut([C; P]) -> I` closure where `I` yields `C`.
pub trait Crossover<C, const P: usize> {
    type Children: IntoIterator<Item = C>;

    fn crossover(&mut self, parents: [C; P]) -> Self::Children;
}

impl<C, F, I, const P: usize> Crossover<C, P> for F
where
    F: FnMut([C; P]) -> I,
    I: IntoIterator<Item = C>,
{
    type Children = I;

    fn crossover(&mut self, parents: [C; P]) -> I {
        self(parents)
    }
}

/// Perturbs a freshly bred child.
///
/// Implemented for every `FnMut(C) -> C` closure.
pub trait Mutation<C> {
    fn mutate(&mut self, child: C) -> C;
}

impl<C, F> Mutation<C> for F
where
    F: FnMut(C) -> C,
{
    fn mutate(&mut self, child: C) -> C {
        self(child)
    }
}

/// Builds the next population from this generation's parents and children.
///
/// Implemented for every `FnMut(Vec<State<C>>, Vec<State<C>>) -> Vec<State<C>>`
/// closure.
pub trait Replacement<C> {
    fn replace(&mut self, parents: Vec<State<C>>, children: Vec<State<C>>) -> Vec<State<C>>;
}

impl<C, F> Replacement<C> for F
where
    F: FnMut(Vec<State<C>>, Vec<State<C>>) -> Vec<State<C>>,
{
    fn replace(&mut self, parents: Vec<State<C>>, children: Vec<State<C>>) -> Vec<State<C>> {
        self(parents, children)
    }
}

/// The policies driving one GA run.
#[derive(Debug, Clone)]
pub struct Pipeline<Z, S, X, K, U, E, T> {
    pub sizer: Z,
    pub selection: S,
    pub matchmaker: X,
    pub crossover: K,
    pub mutation: U,
    pub replacement: E,
    pub termination: T,
}

impl<Z, S, X, K, U, E, T> Pipeline<Z, S, X, K, U, E, T> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sizer: Z,
        selection: S,
        matchmaker: X,
        crossover: K,
        mutation: U,
        replacement: E,
        termination: T,
    ) -> Self {
        Self {
            sizer,
            selection,
            matchmaker,
            crossover,
            mutation,
            replacement,
            termination,
        }
    }
}

/// Progress hooks of a GA run.
///
/// Every hook defaults to a no-op.
#[allow(unused_variables)]
pub trait Observer<C> {
    fn started(&mut self, ga: &GeneticAlgorithm<C>) {}

    /// Called after every replacement, also when the new population is empty.
    fn population_updated(&mut self, ga: &GeneticAlgorithm<C>) {}

    fn finished(&mut self, ga: &GeneticAlgorithm<C>) {}
}
