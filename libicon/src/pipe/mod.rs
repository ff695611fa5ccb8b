/// A single conversion stage.
///
/// `Ok(None)` means the stage consumed its input without producing anything,
/// chained stages stop there without reporting an error.
pub trait Pipe {
    type Input;
    type Output;

    type Error;

    fn process(&mut self, input: Self::Input) -> Result<Option<Self::Output>, Self::Error>;

    fn pipe<P>(self, then: P) -> Chain<Self, P>
    where
        Self: Sized,
        P: Pipe<Input = Self::Output, Error = Self::Error>,
    {
        Chain { first: self, then }
    }
}

/// Two stages run back to back, see [`Pipe::pipe`].
#[derive(Debug)]
pub struct Chain<A, B> {
    first: A,
    then: B,
}

impl<A, B> Pipe for Chain<A, B>
where
    A: Pipe,
    B: Pipe<Input = A::Output, Error = A::Error>,
{
    type Input = A::Input;
    type Output = B::Output;
    type Error = A::Error;

    fn process(&mut self, input: Self::Input) -> Result<Option<Self::Output>, Self::Error> {
        match self.first.process(input)? {
            Some(next) => self.then.process(next),
            None => Ok(None),
        }
    }
}

#[test]
fn chained_pipe_stops_on_none() {
    struct Halve;
    impl Pipe for Halve {
        type Input = u32;
        type Output = u32;
        type Error = ();

        fn process(&mut self, input: u32) -> Result<Option<u32>, ()> {
            Ok((input % 2 == 0).then_some(input / 2))
        }
    }

    struct Fail;
    impl Pipe for Fail {
        type Input = u32;
        type Output = u32;
        type Error = ();

        fn process(&mut self, _: u32) -> Result<Option<u32>, ()> {
            Err(())
        }
    }

    let mut twice = Halve.pipe(Halve);
    assert_eq!(twice.process(8), Ok(Some(2)));
    assert_eq!(twice.process(6), Ok(None));

    // the second stage never runs when the first one yields nothing
    let mut failing = Halve.pipe(Fail);
    assert_eq!(failing.process(3), Ok(None));
    assert_eq!(failing.process(4), Err(()));
}
