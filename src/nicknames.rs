// 📇 Nickname equivalence table
// Each row is one family of interchangeable given names. Read-only;
// lookups are case-insensitive.

pub const NICKNAMES: &[&[&str]] = &[
    &["Abigail", "Abby", "Gail"],
    &["Abraham", "Abe"],
    &["Albert", "Al", "Bert", "Bertie"],
    &["Alexander", "Alex", "Al", "Sandy", "Xander"],
    &["Alexandra", "Alex", "Sandra", "Sandy", "Lexie"],
    &["Alfred", "Al", "Alf", "Fred"],
    &["Andrew", "Andy", "Drew"],
    &["Anthony", "Tony"],
    &["Barbara", "Barb", "Barbie", "Babs"],
    &["Benjamin", "Ben", "Benny", "Benji"],
    &["Bradley", "Brad"],
    &["Catherine", "Cathy", "Kate", "Katie", "Cat"],
    &["Charles", "Charlie", "Chuck", "Chaz"],
    &["Christopher", "Chris", "Kit", "Topher"],
    &["Cynthia", "Cindy"],
    &["Daniel", "Dan", "Danny"],
    &["David", "Dave", "Davey"],
    &["Deborah", "Debbie", "Deb"],
    &["Donald", "Don", "Donnie"],
    &["Douglas", "Doug"],
    &["Edward", "Ed", "Eddie", "Ted", "Ned"],
    &["Elizabeth", "Liz", "Beth", "Betty", "Betsy", "Eliza", "Lisa"],
    &["Eugene", "Gene"],
    &["Frances", "Fran", "Frannie"],
    &["Francis", "Frank", "Frankie"],
    &["Frederick", "Fred", "Freddie", "Rick"],
    &["Gerald", "Gerry", "Jerry"],
    &["Gregory", "Greg"],
    &["Harold", "Hal", "Harry"],
    &["Henry", "Hank", "Harry"],
    &["Howard", "Howie"],
    &["Jacob", "Jake"],
    &["James", "Jim", "Jimmy", "Jamie"],
    &["Jeffrey", "Jeff"],
    &["Jennifer", "Jen", "Jenny"],
    &["John", "Jack", "Johnny", "Jon"],
    &["Jonathan", "Jon", "Jonny"],
    &["Joseph", "Joe", "Joey"],
    &["Joshua", "Josh"],
    &["Katherine", "Kathy", "Kate", "Katie", "Kay"],
    &["Kenneth", "Ken", "Kenny"],
    &["Lawrence", "Larry"],
    &["Leonard", "Len", "Lenny", "Leo"],
    &["Margaret", "Maggie", "Meg", "Peggy", "Marge"],
    &["Matthew", "Matt"],
    &["Michael", "Mike", "Mikey", "Mick"],
    &["Nathaniel", "Nate", "Nat"],
    &["Nicholas", "Nick", "Nicky"],
    &["Patricia", "Pat", "Patty", "Trish"],
    &["Patrick", "Pat", "Paddy"],
    &["Peter", "Pete"],
    &["Philip", "Phil"],
    &["Raymond", "Ray"],
    &["Richard", "Rick", "Dick", "Rich", "Ricky"],
    &["Robert", "Bob", "Bobby", "Rob", "Robbie", "Bert"],
    &["Ronald", "Ron", "Ronnie"],
    &["Samuel", "Sam", "Sammy"],
    &["Stephen", "Steve", "Stevie"],
    &["Steven", "Steve", "Stevie"],
    &["Susan", "Sue", "Susie"],
    &["Theodore", "Ted", "Teddy", "Theo"],
    &["Thomas", "Tom", "Tommy"],
    &["Timothy", "Tim", "Timmy"],
    &["Victoria", "Vicky", "Tori"],
    &["Walter", "Walt", "Wally"],
    &["William", "Bill", "Billy", "Will", "Willie", "Liam"],
    &["Zachary", "Zach", "Zack"],
];

/// True when both names belong to one nickname family
pub fn are_nickname_equivalent(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    if a.is_empty() || b.is_empty() {
        return false;
    }

    NICKNAMES.iter().any(|family| {
        family.iter().any(|name| name.eq_ignore_ascii_case(a))
            && family.iter().any(|name| name.eq_ignore_ascii_case(b))
    })
}
