/*!
External wire formats: the thin text/JSON codecs an outer process uses to
hand an [`ArgumentationSystem`](crate::structures::system::ArgumentationSystem)
or a dataset sample to this crate, and to get one back out. Neither submodule
touches the core labellers; both only translate between strings and the
structures in [`crate::structures`].
*/

pub mod json;
pub mod sample;
