use segtrie::map::TrieMap;
use segtrie::segment::Split;

fn main() {
    // Route table keyed by path component
    let mut routes = TrieMap::new(Split::new('/'));
    routes.insert("static", "files");
    routes.insert("api", "api root");
    routes.insert("api/users", "user list");
    routes.insert("api/users/me", "current user");

    // The most specific route handling a request is the deepest value met
    // on the way down, or the value at the end of the path.
    for request in ["api/users/me", "api/users/42", "api/health", "login"] {
        let result = routes.search(&request, true, false);
        let handler = result
            .found
            .or_else(|| result.encountered.last().copied())
            .map(|entry| entry.value);
        println!("{request} -> {:?}", handler);
    }

    // Everything mounted under "api"
    let result = routes.search(&"api", false, true);
    for entry in result.remainder {
        println!("api route: {} ({})", entry.key, entry.value);
    }
}
