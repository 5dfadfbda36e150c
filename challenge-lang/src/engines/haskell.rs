use crate::engines::CommandConfiguration;
use crate::Engine;

const TEMPLATE: &str = r#"main :: IO ()
main = do
    input <- getContents
    return ()
"#;

/// Haskell solutions, interpreted by `runhaskell` (`$CHALLENGE_RUNHASKELL`).
pub fn engine() -> Engine {
    CommandConfiguration::from_env("CHALLENGE_RUNHASKELL", "runhaskell")
        .engine("haskell", "Main.hs")
        .with_template(TEMPLATE)
}
