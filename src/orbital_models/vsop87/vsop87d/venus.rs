//! VSOP87D series for Venus: heliocentric L, B, R on the ecliptic and equinox of date.

use std::f64::consts::PI;

use super::super::{Reference, Term, Variables, Vsop87Table};

const L0: &[Term] = &[
    [3.17614666774, 0.0, 0.0],
    [0.01353968419, 5.59313319619, 10213.285546211],
    [0.00089891645, 5.30650048468, 20426.571092422],
    [0.00005477201, 4.41630652531, 7860.4193924392],
    [0.00003455732, 2.69964470778, 11790.6290886588],
    [0.00002372061, 2.99377539568, 3930.2096962196],
    [0.00001317108, 5.18668219093, 26.2983197998],
    [0.00001664069, 4.2501893503, 1577.3435424478],
    [0.00001438322, 4.15745043958, 9683.5945811164],
    [0.00001200521, 6.15357115319, 30639.856638633],
    [0.0000076138, 1.9501470212, 529.6909650946],
    [0.00000707676, 1.06466707214, 775.522611324],
    [0.00000584836, 3.99839884762, 191.4482661116],
    [0.00000769314, 0.81629615911, 9437.762934887],
    [0.00000499915, 4.12340210074, 15720.8387848784],
    [0.00000326221, 4.59056473097, 10404.7338123226],
    [0.00000429498, 3.58642859752, 19367.1891622328],
    [0.00000326967, 5.67736583705, 5507.5532386674],
    [0.00000231937, 3.16251057072, 9153.9036160218],
    [0.00000179695, 4.65337915578, 1109.3785520934],
    [0.00000128263, 4.22604493736, 20.7753954924],
    [0.00000155464, 5.57043888948, 19651.048481098],
    [0.00000127907, 0.96209822685, 5661.3320491522],
    [0.00000105547, 1.53721191253, 801.8209311238],
    [0.00000085722, 0.35589249966, 3154.6870848956],
    [0.00000099121, 0.83288185132, 213.299095438],
    [0.00000098804, 5.39389655503, 13367.9726311066],
    [0.00000082094, 3.21596990826, 18837.49819713819],
    [0.00000088031, 3.88868860307, 9999.986450773],
    [0.00000071577, 0.11145739345, 11015.1064773348],
    [0.00000056122, 4.24039855475, 7.1135470008],
    [0.00000070239, 0.67458813282, 23581.2581773176],
    [0.00000050796, 0.24531603049, 11322.6640983044],
    [0.00000046111, 5.31576465717, 18073.7049386502],
    [0.00000044574, 6.06282201966, 40853.142184844],
    [0.00000042594, 5.3287333721, 2352.8661537718],
    [0.00000042635, 1.7995542168, 7084.8967811152],
    [0.00000041177, 0.36240972161, 382.8965322232],
    [0.00000035749, 2.70448479296, 10206.1719992102],
    [0.00000033893, 2.02347322198, 6283.0758499914],
    [0.00000029138, 3.59230925768, 22003.9146348698],
    [0.00000028479, 2.22375414002, 1059.3819301892],
    [0.0000002985, 4.02176977477, 10239.5838660108],
    [0.00000033252, 2.10025596509, 27511.4678735372],
    [0.00000030172, 4.9419191989, 13745.3462390224],
    [0.00000029252, 3.51392387787, 283.8593188652],
    [0.00000024424, 2.70177493852, 8624.2126509272],
    [0.00000020274, 3.79493637509, 14143.4952424306],
    [0.00000024322, 4.27814493315, 5.5229243074],
    [0.0000002626, 0.54067587552, 17298.1823273262],
    [0.00000020492, 0.58547075036, 38.0276726358],
    [0.00000018988, 4.13811500642, 4551.9534970588],
    [0.00000023739, 4.82870797552, 6872.6731195112],
    [0.00000015885, 1.50067222283, 8635.9420037632],
    [0.00000019069, 6.12025580313, 29050.7837433492],
    [0.00000018269, 3.04740408477, 19999.97290154599],
    [0.00000013656, 4.41336292334, 3532.0606928114],
    [0.00000017094, 3.5216152643, 31441.6775697568],
    [0.00000010955, 2.84562790076, 18307.8072320436],
    [0.00000011048, 2.58361219075, 9786.687355335],
    [0.00000009904, 1.08737710389, 7064.1213856228],
    [0.00000010576, 0.85419784436, 10596.1820784342],
    [0.00000009231, 5.52471655579, 12566.1516999828],
    [0.00000011599, 5.81007422699, 19896.8801273274],
    [0.00000011807, 1.91250672543, 21228.3920235458],
    [0.00000010105, 2.34270786693, 10742.9765113056],
    [0.00000008154, 1.92331359797, 15.252471185],
    [0.00000008893, 1.97291388515, 10186.9872264112],
    [0.00000009352, 4.94508904764, 35371.8872659764],
    [0.00000006821, 4.39733188968, 8662.240323563],
    [0.00000006688, 1.55310437864, 14945.3161735544],
    [0.00000006413, 2.17677652923, 10988.808157535],
    [0.00000005802, 1.93462125906, 3340.6124266998],
    [0.0000000595, 2.96578175391, 4732.0306273434],
    [0.00000005275, 5.01877102496, 28286.9904848612],
    [0.00000007047, 1.00111452053, 632.7837393132],
    [0.00000005048, 4.27886209626, 29580.4747084438],
    [0.00000006305, 0.3550633118, 103.0927742186],
    [0.00000005959, 5.04792949464, 245.8316462294],
    [0.00000004651, 0.85218058876, 6770.7106012456],
    [0.0000000558, 0.48723384809, 522.5774180938],
    [0.00000005327, 3.03115417024, 10021.8372800994],
    [0.0000000501, 5.773751665, 28521.0927782546],
    [0.00000004608, 1.93302108394, 4705.7323075436],
    [0.00000005526, 3.36797048901, 25158.6017197654],
    [0.00000003863, 4.89351531412, 25934.1243310894],
    [0.00000005303, 0.08161426841, 39302.096962196],
    [0.00000004254, 5.36046113295, 21535.9496445154],
    [0.00000003763, 1.05304597315, 19.66976089979],
    [0.00000004407, 4.02575374517, 74.7815985673],
    [0.00000004145, 1.14356412295, 9676.4810341156],
    [0.00000004318, 4.38289970585, 316.3918696566],
    [0.00000003642, 6.11733529325, 3128.3887650958],
    [0.00000003238, 5.39551036769, 419.4846438752],
    [0.00000003909, 4.0526363533, 9690.7081281172],
    [0.00000003152, 0.72553551731, 16496.3613962024],
    [0.00000003496, 0.72414615705, 3723.508958923],
    [0.00000003755, 3.80208713127, 19786.67380610799],
    [0.00000002891, 3.3378273777, 32217.2001810808],
    [0.00000003016, 1.57249112496, 17277.4069318338],
    [0.00000003825, 0.19612312903, 426.598190876],
    [0.00000003798, 0.45524571743, 10316.3783204296],
    [0.0000000257, 1.20813474107, 13936.794505134],
    [0.00000002796, 3.65128969074, 206.1855484372],
    [0.00000002466, 3.61988676373, 1551.045222648],
    [0.00000003108, 1.50325806664, 43232.3066584156],
    [0.00000002976, 4.79415001304, 29088.811415985],
    [0.00000002217, 3.59623681714, 24356.7807886416],
    [0.00000002227, 4.9605922194, 536.8045120954],
    [0.00000002397, 3.45249688427, 19374.3027092336],
    [0.00000002462, 0.53295178258, 19360.07561523199],
    [0.00000002205, 2.70399309963, 12592.4500197826],
    [0.0000000223, 3.01413465913, 18875.525869774],
    [0.00000001858, 4.06129152783, 2379.1644735716],
    [0.00000001807, 3.15086214479, 9573.388259897],
    [0.00000002238, 5.52216925076, 10138.5039476437],
    [0.00000002195, 2.32046770554, 8094.5216858326],
    [0.00000002101, 2.90421302975, 9967.4538999816],
    [0.00000001916, 4.56513949099, 2218.7571041868],
    [0.00000001467, 2.42640162465, 10234.0609417034],
    [0.00000001726, 5.59790693845, 20452.8694122218],
    [0.00000001455, 2.44757248737, 1589.0728952838],
    [0.00000001991, 4.04623390359, 31749.2351907264],
    [0.00000001406, 2.71736996917, 16983.9961474566],
    [0.00000001658, 0.11252373292, 153.7788104848],
    [0.00000001851, 2.92898027939, 47162.5163546352],
    [0.00000001492, 1.07513892753, 9103.9069941176],
    [0.00000001247, 2.48433565896, 17778.11626694899],
    [0.00000001549, 4.205536543, 3442.5749449654],
    [0.00000001243, 3.95452438599, 170.6728706192],
    [0.00000001694, 6.20694480406, 33019.0211122046],
    [0.00000001221, 4.77931820602, 30110.1656735384],
    [0.00000001206, 0.30531303095, 29864.334027309],
    [0.00000001238, 5.05581820608, 20213.271996984],
    [0.00000001152, 3.26229919481, 11.729352836],
    [0.00000001179, 1.69491074791, 20400.2727726222],
    [0.00000001165, 2.88995128147, 574.3447983348],
    [0.00000001306, 0.14519588607, 9146.790069021],
    [0.00000001113, 1.52598846804, 10426.584641649],
    [0.00000001104, 2.58791423813, 18849.2275499742],
    [0.00000001045, 0.5753921642, 15874.6175953632],
    [0.0000000136, 2.41976595457, 38734.3783244656],
    [0.00000000981, 4.37930727798, 110.2063212194],
    [0.00000001095, 0.49492867814, 51066.427731055],
    [0.00000001146, 4.54241454215, 10220.3990932118],
    [0.00000000981, 1.65915064733, 10103.0792249916],
    [0.0000000127, 4.69374306132, 9050.8108418032],
    [0.00000001065, 4.41645258887, 22805.7355659936],
    [0.00000000854, 2.34437926957, 6681.2248533996],
    [0.00000001104, 0.49781459714, 1.4844727083],
    [0.00000001075, 1.09857593161, 377.3736079158],
    [0.00000001114, 4.35024775806, 51092.7260508548],
    [0.00000000829, 5.41196274578, 27991.40181316],
    [0.000000009, 2.74195379617, 41962.5207369374],
    [0.0000000101, 2.96092073452, 135.62532501],
    [0.00000000768, 3.98260860494, 18844.61174413899],
    [0.00000001018, 1.36891050752, 36949.2308084242],
    [0.00000000726, 1.67728773965, 21202.093703746],
    [0.00000000727, 0.89048212541, 467.9649903544],
    [0.00000000869, 2.93767679827, 10192.5101507186],
    [0.00000000696, 5.35698039414, 10063.7223490764],
    [0.0000000092, 4.17128923588, 18734.4054229196],
    [0.00000000691, 1.50594097883, 27197.2816936676],
    [0.00000000835, 0.48050621092, 20618.0193585336],
    [0.00000000711, 0.19750098222, 18830.38465013739],
    [0.00000000811, 0.16685071959, 12432.0426503978],
    [0.00000000756, 3.79022623226, 9161.0171630226],
    [0.00000000622, 5.33659507738, 9411.4646150872],
    [0.00000000862, 5.72705356405, 10175.1525105732],
    [0.00000000853, 0.10404188453, 2107.0345075424],
    [0.00000000742, 3.96365892051, 813.5502839598],
    [0.00000000705, 0.71229660616, 220.4126424388],
    [0.00000000584, 1.719006927, 36.0278666774],
    [0.00000000612, 0.36418385449, 949.1756089698],
    [0.00000000587, 1.5864894929, 6.62855890001],
    [0.00000000581, 5.49288908804, 6309.3741697912],
    [0.00000000581, 4.80353237853, 24150.080051345],
    [0.00000000516, 6.07328802561, 38.1330356378],
    [0.00000000627, 5.47281424954, 9580.5018068978],
    [0.00000000601, 1.40500080774, 1162.4747044078],
    [0.0000000062, 4.00681042667, 9992.8729037722],
    [0.00000000611, 3.62010998629, 7255.5696517344],
    [0.00000000697, 2.22359630727, 348.924420448],
    [0.00000000693, 5.77432072851, 55022.9357470744],
    [0.00000000494, 0.29761886866, 7058.5984613154],
    [0.00000000563, 0.24172140474, 37410.5672398786],
    [0.00000000487, 5.86917216517, 10137.0194749354],
    [0.00000000493, 2.04534833854, 735.8765135318],
    [0.00000000636, 2.79707392326, 40879.4405046438],
    [0.00000000519, 4.1394565763, 16522.6597160022],
    [0.00000000535, 4.6056959782, 19573.37471066999],
    [0.00000000555, 5.88120421263, 26735.9452622132],
    [0.0000000044, 5.61490649795, 23958.6317852334],
    [0.00000000541, 0.62494922735, 10007.0999977738],
    [0.00000000427, 4.02335620501, 14.2270940016],
    [0.00000000434, 0.29028429049, 9264.1099372412],
    [0.00000000451, 1.66320363626, 26087.9031415742],
    [0.00000000422, 3.38413582674, 10787.6303445458],
    [0.00000000569, 5.14001758731, 27490.6924780448],
    [0.00000000421, 4.23407313457, 39793.7602546548],
    [0.00000000458, 5.2878636882, 49.7570254718],
    [0.00000000418, 5.6909779079, 14765.2390432698],
    [0.00000000475, 0.97544690438, 1052.2683831884],
    [0.00000000387, 4.41665162999, 21.8508293264],
    [0.00000000523, 2.9051242687, 20235.1228263104],
    [0.00000000506, 5.26999314618, 29999.959352319],
    [0.00000000438, 2.49457071132, 20956.2620575166],
    [0.0000000053, 0.71368442157, 33794.5437235286],
    [0.00000000382, 1.9211936548, 3.9321532631],
    [0.00000000365, 3.81715328784, 20419.45754542119],
    [0.00000000426, 2.06384083608, 38204.687359371],
    [0.00000000496, 0.44077356179, 9835.9119382952],
    [0.0000000041, 4.93346326003, 19264.0963880142],
    [0.0000000038, 3.79573358631, 8521.1198767086],
    [0.00000000334, 5.51158557799, 10251.3132188468],
    [0.00000000412, 2.56129670728, 77.673770428],
    [0.00000000418, 2.37865963521, 32.5325507914],
    [0.00000000325, 6.03020523465, 18947.7045183576],
    [0.000000004, 0.91999360201, 227.476132789],
    [0.00000000437, 0.91420135162, 58953.145443294],
    [0.0000000036, 0.82477639126, 22.7752014508],
    [0.00000000413, 4.22381905655, 44809.6502008634],
    [0.00000000375, 3.15657291896, 19992.85935454519],
    [0.00000000371, 6.05370874275, 20007.0864485468],
    [0.00000000361, 5.44371227904, 19470.28193645139],
    [0.00000000386, 5.28120540405, 47623.8527860896],
    [0.00000000389, 0.7321667224, 19050.7972925762],
    [0.0000000032, 2.84811591194, 10199.0584522094],
    [0.00000000386, 3.88754165531, 1975.492545856],
    [0.00000000276, 4.33979180814, 20809.4676246452],
    [0.00000000276, 0.50647429773, 9830.3890139878],
    [0.00000000309, 3.79299100668, 18204.71445782499],
    [0.00000000377, 0.73768791281, 11506.7697697936],
    [0.00000000322, 0.961384421, 30666.1549584328],
    [0.00000000363, 1.3047240669, 9367.2027114598],
    [0.00000000366, 2.79972786028, 11272.6674764002],
    [0.00000000271, 4.66141338193, 846.0828347512],
    [0.00000000259, 0.4203117575, 39264.0692895602],
    [0.00000000285, 0.40546033634, 30.914125635],
    [0.00000000247, 4.80676426942, 36147.4098773004],
    [0.00000000264, 2.71608177583, 11.0457002639],
    [0.00000000233, 2.76423842887, 187.9251477626],
    [0.00000000248, 1.60765612338, 10497.1448650762],
    [0.00000000271, 0.8234891963, 19793.7873531088],
    [0.00000000225, 3.80080957016, 8631.326197928],
    [0.00000000263, 1.92311689852, 37724.7534197482],
    [0.00000000214, 5.01663795092, 639.897286314],
    [0.00000000289, 0.12342601246, 20277.0078952874],
    [0.0000000021, 0.12771800254, 29.8214381488],
    [0.00000000227, 4.18036609801, 17468.8551979454],
    [0.00000000274, 2.34929343, 62883.3551395136],
    [0.0000000026, 5.65254501655, 48739.859897083],
    [0.00000000271, 4.95325404028, 4214.0690150848],
    [0.00000000219, 2.08775228014, 194.9713844606],
    [0.00000000191, 2.49267248333, 568.8218740274],
    [0.0000000025, 1.52909737354, 6037.244203762],
    [0.00000000231, 5.23674429498, 491.6632924588],
    [0.00000000182, 4.98046042571, 18418.01355326299],
    [0.00000000188, 2.82273639603, 1385.8952763362],
    [0.00000000204, 4.09939796199, 14919.0178537546],
    [0.00000000176, 3.8240098246, 9360.089164459],
    [0.00000000198, 2.76491873243, 10217.2176994741],
    [0.00000000168, 5.19268384202, 1066.49547719],
    [0.00000000199, 1.95301487982, 7564.830720738],
    [0.00000000171, 2.59623459612, 20405.7956969296],
    [0.00000000172, 5.29332132623, 11764.330768859],
    [0.00000000165, 2.88557908025, 10207.7626219036],
    [0.00000000164, 3.25435371801, 3914.9572250346],
    [0.000000002, 3.8244321809, 18314.9207790444],
    [0.00000000169, 1.78341902878, 31022.7531708562],
    [0.00000000179, 0.90840065587, 7880.08915333899],
    [0.00000000163, 2.79665037814, 41.5507909848],
    [0.00000000154, 3.90796293476, 30213.258447757],
    [0.00000000153, 0.07463240782, 28528.2063252554],
    [0.00000000194, 5.95838706838, 8617.0991039264],
    [0.00000000171, 4.58206324409, 20447.3464879144],
    [0.0000000015, 2.11647586229, 17248.4253018544],
    [0.00000000149, 2.1725998632, 9929.4262273458],
    [0.00000000191, 0.82310353823, 52670.0695933026],
    [0.00000000148, 2.94315921485, 41654.9631159678],
    [0.00000000149, 4.49798039726, 30831.3049047446],
    [0.00000000184, 2.46923348701, 34596.3646546524],
    [0.00000000146, 2.694529303, 43071.8992890308],
    [0.00000000159, 2.1113771357, 19317.1925403286],
    [0.00000000154, 2.76536164654, 28513.97923125379],
    [0.0000000014, 4.94595038686, 9256.9963902404],
    [0.00000000141, 2.57248458154, 13553.8979729108],
    [0.00000000137, 1.66482327575, 2636.725472637],
    [0.0000000014, 5.2303960599, 22645.32819660879],
    [0.00000000132, 5.35690599728, 19624.7501612982],
    [0.0000000014, 2.90637712614, 48947.6638706766],
    [0.00000000129, 3.95303623681, 32858.61374281979],
    [0.00000000156, 6.01143316387, 29057.89729034999],
    [0.00000000134, 5.75241675118, 68050.42387851159],
    [0.00000000154, 3.66827363753, 276.7457718644],
    [0.00000000176, 3.77298381177, 66813.5648357332],
    [0.00000000126, 5.00217740223, 27461.7108480654],
    [0.00000000135, 1.3480701392, 53285.1848352418],
    [0.0000000015, 0.25029475344, 290.972865866],
    [0.00000000152, 3.13035670092, 29043.67019634839],
    [0.00000000169, 5.0434810943, 73.297125859],
    [0.00000000166, 5.39219948035, 41236.0387170672],
    [0.00000000163, 5.59796070987, 7576.560073574],
    [0.00000000126, 0.77391784606, 49.9966219042],
    [0.00000000163, 0.44241846674, 20350.3050211464],
    [0.00000000136, 3.09066368912, 418.9243989006],
    [0.00000000154, 0.4708619096, 28418.000004036],
    [0.0000000012, 0.88536981986, 29573.361161443],
    [0.00000000132, 1.4800976904, 17085.9586657222],
    [0.00000000126, 1.39497760964, 966.9708774356],
    [0.00000000143, 3.84026797958, 14128.2427712456],
    [0.00000000147, 2.11627427804, 34363.365597556],
    [0.00000000106, 2.04696932293, 37674.9963942764],
    [0.00000000106, 1.43873202489, 27682.1407441564],
    [0.00000000149, 0.09286508794, 8144.2787113044],
    [0.00000000103, 0.0199204147, 18300.69368504279],
    [0.00000000121, 3.57602835443, 45.1412196366],
    [0.00000000125, 0.11630302078, 149.5631971346],
    [0.00000000102, 4.1794709773, 2333.196392872],
    [0.00000000099, 1.51324741657, 10419.4710946482],
    [0.00000000133, 3.02183293676, 76251.32777062019],
    [0.00000000136, 4.17517197268, 3646.3503773544],
    [0.00000000123, 0.44045588682, 515.463871093],
    [0.00000000113, 5.69261397718, 10110.1927719924],
    [0.00000000098, 6.23797900467, 202.2533951741],
    [0.00000000099, 3.75627530197, 59728.668054618],
    [0.00000000101, 4.62832557536, 65236.2212932854],
    [0.00000000111, 1.25947267588, 10846.0692855242],
    [0.0000000011, 5.87455577536, 38500.2760310722],
    [0.00000000128, 6.0102456216, 90394.82301305079],
    [0.00000000091, 1.77665981007, 1539.315869812],
    [0.00000000092, 0.99804571578, 95.9792272178],
    [0.0000000012, 3.93060866244, 38526.574350872],
    [0.00000000117, 2.24143299549, 56600.2792895222],
    [0.00000000118, 6.0912132594, 29786.660256881],
    [0.00000000098, 4.60938156207, 11787.1059703098],
    [0.00000000097, 3.92727733144, 11794.1522070078],
    [0.00000000093, 5.23395435043, 14169.7935622304],
    [0.00000000096, 5.27525709038, 8734.4189721466],
    [0.00000000094, 0.18166654805, 67589.08744705719],
    [0.0000000011, 4.96279287076, 48417.97290558199],
    [0.00000000086, 0.39533409505, 3956.5080160194],
    [0.00000000085, 5.69642646462, 37703.9780242558],
    [0.00000000114, 5.19676285428, 70743.77453195279],
    [0.00000000081, 5.51324815184, 412.3710968744],
    [0.00000000089, 2.13409771828, 44768.0994098786],
    [0.00000000084, 6.02475904578, 10632.7701900862],
    [0.00000000085, 4.60912614442, 45585.1728121874],
    [0.00000000078, 4.47358603432, 114.43928868521],
    [0.00000000097, 4.02223363535, 10218.8084705184],
    [0.00000000081, 1.03870237004, 9793.8009023358],
    [0.00000000092, 0.80301220092, 24383.0791084414],
    [0.00000000087, 2.15124790938, 28313.288804661],
    [0.00000000075, 5.17868679355, 63658.8777508376],
    [0.00000000078, 5.81927313665, 567.7186377304],
    [0.00000000075, 1.72618192481, 19580.4882576708],
    [0.00000000071, 0.10259261764, 90695.75207512038],
    [0.00000000077, 6.16012067704, 1573.8204240988],
    [0.00000000076, 5.12884307551, 49515.382508407],
    [0.00000000069, 0.29569499484, 10175.2578735752],
    [0.00000000061, 4.80385549281, 19889.76658032659],
    [0.0000000006, 4.56685040226, 30426.557543195],
    [0.00000000062, 4.16222812699, 42430.4857272918],
    [0.0000000005, 6.17899839001, 22779.4372461938],
    [0.00000000048, 1.52546758016, 20639.87018786],
    [0.00000000046, 4.41738494249, 34570.0663348526],
    [0.00000000037, 4.69675087759, 44007.8292697396],
];

const L1: &[Term] = &[
    [10213.52943052898, 0.0, 0.0],
    [0.00095707712, 2.46424448979, 10213.285546211],
    [0.00014444977, 0.51624564679, 20426.571092422],
    [0.00000213374, 1.79547929368, 30639.856638633],
    [0.00000151669, 6.10635282369, 1577.3435424478],
    [0.00000173904, 2.65535879443, 26.2983197998],
    [0.00000082233, 5.7023413373, 191.4482661116],
    [0.00000069734, 2.68136034979, 9437.762934887],
    [0.00000052408, 3.60013087656, 775.522611324],
    [0.00000038318, 1.03379038025, 529.6909650946],
    [0.00000029633, 1.25056322354, 5507.5532386674],
    [0.00000025056, 6.10664792855, 10404.7338123226],
    [0.00000017772, 6.19369798901, 1109.3785520934],
    [0.0000001651, 2.6433045264, 7.1135470008],
    [0.0000001423, 5.45138233941, 9153.9036160218],
    [0.00000012607, 1.24464400689, 40853.142184844],
    [0.00000011627, 4.97604495371, 213.299095438],
    [0.00000012563, 1.88122199199, 382.8965322232],
    [0.00000008869, 0.95282732248, 13367.9726311066],
    [0.00000007374, 4.3947676058, 10206.1719992102],
    [0.00000006552, 2.28168808058, 2352.8661537718],
    [0.00000006255, 4.08056644034, 3154.6870848956],
    [0.00000006697, 5.05673427795, 801.8209311238],
    [0.00000004084, 4.1210382603, 18837.49819713819],
    [0.00000004882, 3.44515199115, 11015.1064773348],
    [0.00000003549, 6.19934345402, 5.5229243074],
    [0.00000003448, 1.77405651704, 11322.6640983044],
    [0.0000000429, 0.0815480921, 6283.0758499914],
    [0.00000003694, 2.48453945256, 5661.3320491522],
    [0.00000003555, 1.4803694942, 1059.3819301892],
    [0.00000003023, 2.24092938317, 18073.7049386502],
    [0.00000003, 0.39169917698, 15.252471185],
    [0.00000002563, 0.35147506973, 22003.9146348698],
    [0.00000002774, 1.45683830639, 10239.5838660108],
    [0.00000002951, 5.34618097429, 7084.8967811152],
    [0.00000002344, 2.36652432105, 17298.1823273262],
    [0.00000002405, 2.36085282088, 10596.1820784342],
    [0.0000000172, 4.72129626061, 10186.9872264112],
    [0.00000002209, 2.07730338665, 8635.9420037632],
    [0.00000002122, 4.47091605309, 8624.2126509272],
    [0.00000001527, 0.67146857292, 14143.4952424306],
    [0.00000001473, 2.59350470099, 7064.1213856228],
    [0.00000001311, 0.90408820221, 12566.1516999828],
    [0.00000001474, 5.92236241437, 9786.687355335],
    [0.00000001237, 2.59740787132, 4551.9534970588],
    [0.00000001219, 2.83617320088, 9676.4810341156],
    [0.00000001116, 3.83715584719, 21228.3920235458],
    [0.00000001006, 4.26200749078, 426.598190876],
    [0.0000000115, 2.35531987378, 9690.7081281172],
    [0.00000001219, 2.27324315182, 522.5774180938],
    [0.0000000115, 0.81088598778, 10742.9765113056],
    [0.00000001101, 3.74248783564, 18307.8072320436],
    [0.00000001031, 2.03889374176, 38.0276726358],
    [0.00000000971, 6.10590045414, 3532.0606928114],
    [0.00000000844, 4.75124127613, 10988.808157535],
    [0.00000000908, 1.06613723738, 10021.8372800994],
    [0.00000000824, 0.23090829723, 28286.9904848612],
    [0.00000000821, 2.60456032773, 19.66976089979],
    [0.00000000728, 0.10716917942, 4705.7323075436],
    [0.00000000744, 3.33129778857, 536.8045120954],
    [0.00000000816, 1.27303930175, 19896.8801273274],
    [0.00000000929, 1.08024621325, 11790.6290886588],
    [0.00000000797, 2.23891816523, 3723.508958923],
    [0.00000000704, 5.95307260017, 20.7753954924],
    [0.00000000665, 0.21346689192, 7860.4193924392],
    [0.00000000733, 2.22147883292, 19360.07561523199],
    [0.00000000702, 1.76206343944, 19374.3027092336],
    [0.00000000575, 2.38792087791, 6770.7106012456],
    [0.00000000538, 1.52023264138, 25934.1243310894],
    [0.0000000069, 4.01873754171, 19651.048481098],
    [0.00000000532, 4.4157613089, 574.3447983348],
    [0.0000000054, 2.15936134728, 16496.3613962024],
    [0.00000000576, 5.41170044566, 206.1855484372],
    [0.00000000482, 0.40815793538, 3340.6124266998],
    [0.00000000501, 3.08578363577, 245.8316462294],
    [0.00000000488, 5.22311611589, 25158.6017197654],
    [0.0000000045, 0.212798446, 11.729352836],
    [0.00000000432, 1.32004964493, 103.0927742186],
    [0.00000000434, 5.91094755233, 19786.67380610799],
    [0.00000000564, 0.38776462529, 19367.1891622328],
    [0.00000000421, 2.71057839701, 13936.794505134],
    [0.00000000549, 6.08792865644, 3930.2096962196],
    [0.00000000478, 4.70234715828, 14945.3161735544],
    [0.00000000408, 4.80890663927, 32217.2001810808],
    [0.00000000404, 2.85003595942, 29864.334027309],
    [0.00000000407, 2.94002049006, 10220.3990932118],
    [0.00000000359, 0.72354778897, 419.4846438752],
    [0.00000000449, 1.44520508753, 8662.240323563],
    [0.00000000353, 2.22195492336, 51066.427731055],
    [0.00000000324, 1.40308439067, 29580.4747084438],
    [0.00000000443, 1.93864353398, 9146.790069021],
    [0.00000000314, 0.96837035284, 20618.0193585336],
    [0.00000000324, 5.10759068171, 24356.7807886416],
    [0.00000000324, 1.80146948625, 18830.38465013739],
    [0.0000000037, 6.16895004656, 2218.7571041868],
    [0.00000000278, 2.20429108375, 18844.61174413899],
    [0.00000000286, 3.08459438435, 17277.4069318338],
    [0.00000000383, 0.13890934755, 4732.0306273434],
    [0.00000000292, 0.43528982259, 29088.811415985],
    [0.00000000273, 5.84415407168, 9573.388259897],
    [0.00000000324, 2.14144542781, 9999.986450773],
    [0.00000000264, 5.20407029554, 220.4126424388],
    [0.00000000254, 0.34411959301, 28521.0927782546],
    [0.000000003, 3.76014360906, 8094.5216858326],
    [0.00000000301, 3.64457981649, 20400.2727726222],
    [0.00000000287, 1.84003536598, 1589.0728952838],
    [0.00000000206, 0.97167234723, 10234.0609417034],
    [0.00000000212, 0.241736776, 36.0278666774],
    [0.00000000216, 5.8861892303, 18875.525869774],
    [0.00000000198, 1.89506914939, 20452.8694122218],
    [0.00000000258, 6.27611355094, 1551.045222648],
    [0.00000000197, 2.09222675324, 9683.5945811164],
    [0.00000000217, 5.79472589364, 9103.9069941176],
    [0.00000000188, 0.39123199129, 19573.37471066999],
    [0.00000000195, 6.23142464829, 30110.1656735384],
    [0.00000000187, 5.49670351645, 170.6728706192],
    [0.00000000178, 4.90042854659, 10787.6303445458],
    [0.00000000188, 1.62614804098, 9161.0171630226],
    [0.00000000211, 2.71884568392, 15720.8387848784],
    [0.00000000177, 1.88170417337, 33019.0211122046],
    [0.00000000209, 2.66033422116, 3442.5749449654],
    [0.00000000164, 4.92240093026, 10426.584641649],
    [0.00000000186, 5.13678812068, 7255.5696517344],
    [0.00000000177, 5.70206821967, 9992.8729037722],
    [0.00000000214, 2.70027196648, 3128.3887650958],
    [0.00000000208, 3.38876526854, 17778.11626694899],
    [0.00000000147, 4.25008782855, 16983.9961474566],
    [0.00000000148, 3.4640441813, 21202.093703746],
    [0.00000000189, 1.43553862242, 2379.1644735716],
    [0.00000000139, 2.99154379541, 110.2063212194],
    [0.00000000159, 5.23851679605, 10007.0999977738],
    [0.00000000136, 0.88942869764, 22805.7355659936],
    [0.00000000155, 5.90500835975, 12592.4500197826],
    [0.00000000151, 0.03422618975, 27991.40181316],
    [0.00000000153, 4.01743770323, 33794.5437235286],
    [0.00000000121, 0.51392111799, 21535.9496445154],
    [0.00000000109, 2.25388616761, 26735.9452622132],
    [0.00000000109, 0.78612823474, 6681.2248533996],
    [0.00000000122, 4.84805105466, 19992.85935454519],
    [0.00000000112, 3.31796669604, 36949.2308084242],
    [0.00000000106, 3.34507236765, 10103.0792249916],
    [0.00000000114, 4.36384000196, 20007.0864485468],
    [0.00000000098, 5.07711736751, 135.62532501],
    [0.0000000012, 5.41870615047, 37724.7534197482],
    [0.00000000103, 2.62610244425, 20213.271996984],
    [0.00000000085, 5.04808202087, 9830.3890139878],
    [0.00000000103, 2.01549383816, 45585.1728121874],
    [0.00000000088, 2.62613816931, 21.8508293264],
    [0.00000000084, 3.50355880173, 639.897286314],
    [0.00000000099, 0.61079620895, 41654.9631159678],
    [0.00000000088, 3.63836700262, 49515.382508407],
    [0.00000000098, 2.42401801881, 23581.2581773176],
    [0.00000000081, 0.46468679835, 77.673770428],
    [0.00000000092, 4.82530051729, 29043.67019634839],
    [0.00000000102, 4.27051236894, 15874.6175953632],
    [0.0000000009, 4.34075776744, 29057.89729034999],
    [0.00000000081, 0.01896422336, 24150.080051345],
    [0.00000000093, 1.79250830018, 12432.0426503978],
    [0.00000000087, 5.25157021446, 14128.2427712456],
    [0.00000000089, 5.65756996753, 377.3736079158],
    [0.00000000097, 5.67942873241, 227.476132789],
    [0.00000000076, 2.93363913259, 38204.687359371],
    [0.00000000091, 2.60544242067, 1052.2683831884],
    [0.00000000087, 3.82284200928, 27511.4678735372],
    [0.00000000073, 4.75280755154, 40879.4405046438],
    [0.00000000067, 3.54815262526, 30666.1549584328],
    [0.00000000067, 5.81350818057, 20809.4676246452],
    [0.00000000064, 4.24772678145, 153.7788104848],
    [0.00000000064, 2.99454749109, 27197.2816936676],
    [0.0000000007, 4.03868009742, 56600.2792895222],
    [0.00000000071, 4.3362880685, 39264.0692895602],
    [0.00000000069, 1.73648747605, 37410.5672398786],
    [0.00000000065, 1.08206062736, 68050.42387851159],
    [0.00000000062, 4.7769845465, 3914.9572250346],
    [0.00000000061, 4.96121014691, 34596.3646546524],
    [0.00000000063, 5.04865067599, 53445.5922046266],
    [0.00000000058, 3.74010494151, 1066.49547719],
    [0.00000000057, 5.39355890141, 20419.45754542119],
    [0.00000000057, 3.59399518494, 735.8765135318],
    [0.00000000065, 2.10322000074, 74.7815985673],
    [0.00000000073, 1.31083648835, 11272.6674764002],
    [0.00000000055, 1.33161298098, 18300.69368504279],
    [0.00000000065, 4.21150522641, 49.7570254718],
    [0.00000000061, 5.66161679402, 17468.8551979454],
    [0.00000000053, 4.30231233835, 18849.2275499742],
    [0.00000000055, 2.63906959481, 52670.0695933026],
    [0.0000000005, 5.69803054279, 39793.7602546548],
    [0.00000000049, 0.77345264124, 35371.8872659764],
    [0.00000000048, 6.00565977593, 283.8593188652],
    [0.00000000047, 2.63299859494, 51868.2486621788],
    [0.00000000046, 0.05105081843, 38526.574350872],
    [0.0000000005, 4.37549274002, 28513.97923125379],
    [0.00000000046, 2.93422086586, 27682.1407441564],
    [0.00000000051, 5.45979584751, 60530.4889857418],
    [0.00000000045, 5.59492908223, 467.9649903544],
    [0.00000000045, 2.34680401001, 9411.4646150872],
    [0.00000000045, 0.02999265111, 44809.6502008634],
    [0.00000000043, 5.62725673544, 14.2270940016],
    [0.00000000047, 3.73567275749, 64460.6986819614],
    [0.00000000046, 0.12586526756, 57375.8019008462],
    [0.00000000044, 2.03114426076, 18314.9207790444],
    [0.00000000039, 0.99375127466, 94138.32702008578],
    [0.00000000053, 0.41974404621, 30831.3049047446],
    [0.00000000055, 1.38351566741, 38500.2760310722],
    [0.00000000041, 4.47012768909, 40077.61957352],
    [0.00000000041, 0.36665992484, 19999.97290154599],
    [0.0000000004, 3.06358586355, 813.5502839598],
    [0.0000000004, 2.16802870803, 59728.668054618],
    [0.00000000037, 1.08739100421, 17085.9586657222],
    [0.00000000039, 1.31040309875, 48739.859897083],
    [0.00000000036, 1.43280677914, 42456.7840470916],
    [0.00000000037, 0.14190533464, 29050.7837433492],
    [0.00000000037, 3.66792179278, 20956.2620575166],
    [0.00000000025, 3.38876180652, 7058.5984613154],
    [0.00000000031, 6.16829805337, 10192.5101507186],
];

const L2: &[Term] = &[
    [0.00054127076, 0.0, 0.0],
    [0.0000389146, 0.34514360047, 10213.285546211],
    [0.0000133788, 2.02011286082, 20426.571092422],
    [0.00000023836, 2.04592119012, 26.2983197998],
    [0.00000019331, 3.53527371458, 30639.856638633],
    [0.00000009984, 3.97130221102, 775.522611324],
    [0.00000007046, 1.51962593409, 1577.3435424478],
    [0.00000006014, 0.99926757893, 191.4482661116],
    [0.00000003163, 4.36095475762, 9437.762934887],
    [0.00000002125, 2.65810625752, 40853.142184844],
    [0.00000001934, 3.39287946981, 382.8965322232],
    [0.0000000146, 6.04899046273, 529.6909650946],
    [0.00000001346, 2.94633106219, 5507.5532386674],
    [0.00000001025, 1.40598904981, 10404.7338123226],
    [0.00000001221, 3.73339139385, 3154.6870848956],
    [0.00000001033, 3.52858472904, 11015.1064773348],
    [0.00000000955, 5.11133878923, 801.8209311238],
    [0.00000000742, 1.49198584483, 1109.3785520934],
    [0.00000000525, 3.32087042103, 213.299095438],
    [0.00000000578, 0.92614279843, 10239.5838660108],
    [0.00000000602, 5.19220099775, 7084.8967811152],
    [0.00000000431, 2.67159914364, 13367.9726311066],
    [0.00000000389, 4.14116341739, 8635.9420037632],
    [0.00000000355, 1.12061570874, 9153.9036160218],
    [0.00000000301, 3.90047984197, 10596.1820784342],
    [0.00000000212, 5.32697688872, 18837.49819713819],
    [0.0000000026, 0.22761369281, 2352.8661537718],
    [0.00000000243, 4.70747902991, 6283.0758499914],
    [0.00000000196, 4.10467294392, 11790.6290886588],
    [0.00000000194, 6.0119775947, 7860.4193924392],
    [0.0000000014, 4.97015671653, 14143.4952424306],
    [0.00000000134, 4.10529011674, 17298.1823273262],
    [0.00000000119, 3.39375528828, 11322.6640983044],
    [0.00000000126, 0.0985451614, 18073.7049386502],
    [0.00000000122, 5.92478855457, 574.3447983348],
    [0.00000000107, 0.35660030184, 1059.3819301892],
    [0.00000000108, 2.25352052666, 12566.1516999828],
    [0.00000000093, 5.48716819776, 10021.8372800994],
    [0.00000000084, 4.89744332968, 18307.8072320436],
    [0.00000000074, 2.35354025573, 426.598190876],
    [0.00000000093, 4.99316908815, 14945.3161735544],
    [0.00000000069, 3.8640906586, 51066.427731055],
    [0.00000000082, 5.36280178643, 10186.9872264112],
    [0.00000000077, 3.75728548372, 3723.508958923],
    [0.00000000063, 5.39882267787, 21228.3920235458],
    [0.00000000056, 4.11564786973, 7064.1213856228],
    [0.00000000056, 6.26920407723, 32217.2001810808],
    [0.0000000006, 5.02186497542, 19367.1891622328],
    [0.00000000058, 5.1326370967, 20400.2727726222],
    [0.00000000051, 4.52870390511, 22003.9146348698],
    [0.00000000041, 3.83822107919, 16496.3613962024],
    [0.00000000041, 3.36020411807, 4705.7323075436],
    [0.00000000043, 5.98371820588, 15720.8387848784],
    [0.00000000047, 0.18498155367, 18875.525869774],
    [0.00000000038, 0.52232581277, 1551.045222648],
    [0.00000000039, 5.05391675878, 10742.9765113056],
    [0.00000000036, 3.16242472203, 20452.8694122218],
    [0.00000000035, 5.17462577483, 29088.811415985],
    [0.00000000035, 3.47325394141, 24356.7807886416],
    [0.00000000031, 4.74511706231, 28521.0927782546],
    [0.00000000029, 0.19383091192, 19896.8801273274],
    [0.00000000033, 1.80059867635, 20618.0193585336],
    [0.00000000024, 0.14022912457, 21202.093703746],
    [0.00000000022, 4.73565067573, 10988.808157535],
    [0.00000000018, 0.74039763161, 25158.6017197654],
    [0.00000000019, 1.53770232218, 28286.9904848612],
    [0.00000000014, 1.49084059765, 30110.1656735384],
    [0.00000000013, 4.72171283479, 29864.334027309],
    [0.00000000013, 5.79700427846, 29580.4747084438],
    [0.00000000014, 3.6920522501, 27511.4678735372],
];

const L3: &[Term] = &[
    [0.00000135742, 4.80389020993, 10213.285546211],
    [0.00000077846, 3.66876371591, 20426.571092422],
    [0.00000026023, 0.0, 0.0],
    [0.00000001214, 5.31970006917, 30639.856638633],
    [0.00000000254, 4.15021671822, 40853.142184844],
    [0.00000000008, 5.55523563261, 51066.427731055],
    [0.00000000008, 1.40501229148, 1577.3435424478],
    [0.00000000006, 1.27791479726, 10404.7338123226],
    [0.00000000006, 5.76447068962, 10239.5838660108],
];

const L4: &[Term] = &[
    [0.00000114016, PI, 0.0],
    [0.00000003209, 5.20514170164, 20426.571092422],
    [0.00000001714, 2.51099591706, 10213.285546211],
    [0.0000000005, 0.71356059861, 30639.856638633],
    [0.00000000023, 5.68127607034, 40853.142184844],
];

const L5: &[Term] = &[
    [0.00000000874, PI, 0.0],
    [0.00000000117, 0.54643013, 20426.571092422],
    [0.00000000118, 1.90548541922, 10213.285546211],
    [0.00000000002, 1.07734277826, 40853.142184844],
    [0.00000000002, 1.89460223529, 30639.856638633],
];

const B0: &[Term] = &[
    [0.05923638472, 0.26702775813, 10213.285546211],
    [0.00040107978, 1.14737178106, 20426.571092422],
    [0.00032814918, PI, 0.0],
    [0.00001011392, 1.08946123021, 30639.856638633],
    [0.00000149458, 6.25390296069, 18073.7049386502],
    [0.00000137788, 0.86020146523, 1577.3435424478],
    [0.00000129973, 3.67152483651, 9437.762934887],
    [0.00000119507, 3.70468812804, 2352.8661537718],
    [0.00000107971, 4.53903677647, 22003.9146348698],
    [0.00000092029, 1.53954562706, 9153.9036160218],
    [0.00000052982, 2.28138172277, 5507.5532386674],
    [0.00000045617, 0.72319641722, 10239.5838660108],
    [0.00000038855, 2.93437865147, 10186.9872264112],
    [0.00000043491, 6.14015776699, 11790.6290886588],
    [0.000000417, 5.99126845246, 19896.8801273274],
    [0.00000039644, 3.86842095901, 8635.9420037632],
    [0.00000039175, 3.94960351174, 529.6909650946],
    [0.0000003332, 4.83194909595, 14143.4952424306],
    [0.00000023711, 2.90646621218, 10988.808157535],
    [0.000000235, 2.00770618322, 13367.9726311066],
    [0.00000021809, 2.69701424951, 19651.048481098],
    [0.00000020653, 0.98666685459, 775.522611324],
    [0.00000016976, 4.13711782135, 10021.8372800994],
    [0.00000017835, 5.96268643102, 25934.1243310894],
    [0.00000014949, 5.61075168206, 10404.7338123226],
    [0.00000018579, 1.80529277514, 40853.142184844],
    [0.00000015407, 3.29563855296, 11015.1064773348],
    [0.00000012936, 5.42651448496, 29580.4747084438],
    [0.00000011962, 3.57604253827, 10742.9765113056],
    [0.00000011827, 1.190709196, 8624.2126509272],
    [0.00000011466, 5.12780364967, 6283.0758499914],
    [0.00000009484, 2.75167834335, 191.4482661116],
    [0.00000013129, 5.70735942511, 9683.5945811164],
    [0.00000008583, 0.43182249199, 9786.687355335],
    [0.00000009763, 0.14614896296, 20618.0193585336],
    [0.00000008148, 1.30548515603, 15720.8387848784],
    [0.0000000605, 6.26541665966, 11322.6640983044],
    [0.00000005955, 4.92235372433, 1059.3819301892],
    [0.00000006983, 3.44920932146, 17298.1823273262],
    [0.00000006228, 1.13312070908, 29864.334027309],
    [0.00000006186, 4.92498052443, 19367.1891622328],
    [0.00000006155, 2.424139469, 4705.7323075436],
    [0.00000005204, 3.42528906628, 9103.9069941176],
    [0.00000006, 3.57639095526, 3154.6870848956],
    [0.00000004796, 3.86676184909, 7860.4193924392],
    [0.00000005289, 4.99182712443, 7084.8967811152],
    [0.0000000407, 5.5879814474, 12566.1516999828],
    [0.00000003942, 5.68758787835, 10206.1719992102],
    [0.00000003797, 3.89520601076, 10192.5101507186],
    [0.00000003798, 6.06410995916, 10234.0609417034],
    [0.00000003579, 0.73789669235, 4551.9534970588],
    [0.00000003641, 2.61501257205, 15874.6175953632],
    [0.00000003266, 0.97517223854, 23581.2581773176],
    [0.00000002813, 0.29951755546, 9411.4646150872],
    [0.00000003048, 2.5108514699, 33794.5437235286],
    [0.00000002559, 4.58043833032, 801.8209311238],
    [0.00000002462, 5.05790874754, 29050.7837433492],
    [0.00000002593, 5.73113176751, 20213.271996984],
    [0.00000002625, 4.24272906574, 213.299095438],
    [0.00000002246, 0.82112963936, 28286.9904848612],
    [0.00000002229, 2.22457598233, 10426.584641649],
    [0.00000001742, 1.48394229233, 7058.5984613154],
    [0.0000000166, 5.42775825275, 32217.2001810808],
    [0.00000001491, 4.64883377941, 1109.3785520934],
    [0.0000000201, 0.75702888128, 9999.986450773],
    [0.00000001562, 3.93962080463, 37724.7534197482],
    [0.00000001538, 2.1730957708, 21535.9496445154],
    [0.00000001546, 4.70759186462, 14945.3161735544],
    [0.000000012, 1.48282382657, 9830.3890139878],
    [0.00000001224, 5.55090394449, 5661.3320491522],
    [0.00000001111, 1.20276209213, 9573.388259897],
    [0.00000001064, 1.98891375536, 26.2983197998],
    [0.00000001041, 5.38535116069, 7.1135470008],
    [0.00000001036, 1.16719443387, 8662.240323563],
    [0.00000001143, 3.20596958337, 3532.0606928114],
    [0.00000001201, 0.81913312536, 8094.5216858326],
    [0.00000001005, 2.38429892132, 27511.4678735372],
    [0.00000001047, 4.56525030769, 20419.45754542119],
    [0.00000000968, 6.18496721871, 25158.6017197654],
    [0.00000001044, 1.98055689074, 10596.1820784342],
    [0.00000000962, 0.48573513747, 23958.6317852334],
    [0.00000000846, 0.01566400887, 3128.3887650958],
    [0.00000000792, 5.39686899735, 24356.7807886416],
    [0.00000000858, 5.34692750735, 41654.9631159678],
    [0.00000000757, 6.25904553773, 20452.8694122218],
    [0.00000000801, 4.62406152514, 9929.4262273458],
    [0.00000000802, 5.3723489252, 10497.1448650762],
    [0.0000000075, 3.85219782842, 21228.3920235458],
    [0.000000007, 1.98097957188, 3930.2096962196],
    [0.00000000719, 6.11596800207, 10218.8084705184],
    [0.00000000672, 6.23429601219, 14765.2390432698],
    [0.00000000639, 5.37566437358, 1589.0728952838],
    [0.00000000605, 2.4233039112, 10251.3132188468],
    [0.00000000726, 6.16683781802, 18875.525869774],
    [0.00000000613, 5.9973118069, 4732.0306273434],
    [0.0000000072, 3.84286345199, 10207.7626219036],
    [0.00000000637, 6.17053891156, 10220.3990932118],
    [0.00000000515, 1.03001478293, 22779.4372461938],
    [0.00000000574, 0.43813688572, 17085.9586657222],
    [0.0000000051, 1.41065159851, 9161.0171630226],
    [0.00000000569, 3.34601425125, 3340.6124266998],
    [0.00000000608, 1.25236241968, 10175.2578735752],
    [0.00000000524, 2.3979424867, 26087.9031415742],
    [0.00000000542, 1.34665646732, 29088.811415985],
    [0.00000000527, 4.01994270827, 18849.2275499742],
    [0.00000000569, 1.65498800378, 39264.0692895602],
    [0.00000000518, 4.96996115446, 30213.258447757],
    [0.00000000514, 5.78413007838, 12592.4500197826],
    [0.00000000538, 4.56198493922, 10063.7223490764],
    [0.00000000484, 4.18538027381, 14919.0178537546],
    [0.00000000493, 4.79939382739, 9146.790069021],
    [0.00000000427, 3.76876868949, 11272.6674764002],
    [0.00000000495, 0.49175293655, 45585.1728121874],
    [0.00000000494, 3.74345863918, 31441.6775697568],
    [0.00000000524, 0.97991794166, 30110.1656735384],
    [0.00000000483, 1.87898057316, 51066.427731055],
    [0.00000000505, 3.70047474212, 20400.2727726222],
    [0.00000000351, 4.3402657449, 10137.0194749354],
    [0.00000000355, 5.56672554631, 18837.49819713819],
    [0.00000000328, 3.7842737891, 6681.2248533996],
    [0.00000000349, 4.20550749672, 20956.2620575166],
    [0.00000000333, 4.44969281739, 28521.0927782546],
    [0.00000000296, 2.83205515646, 17277.4069318338],
    [0.00000000311, 2.57334132897, 20809.4676246452],
    [0.00000000294, 0.75089224483, 3149.1641605882],
    [0.00000000377, 3.98143308775, 21202.093703746],
    [0.00000000272, 5.56183082489, 16496.3613962024],
    [0.00000000314, 0.02584607093, 13745.3462390224],
    [0.00000000263, 0.55328410985, 36147.4098773004],
    [0.00000000286, 5.16408902215, 426.598190876],
    [0.00000000279, 4.29871615943, 19999.97290154599],
    [0.0000000028, 1.92925047377, 49515.382508407],
    [0.00000000265, 4.81168402147, 20235.1228263104],
    [0.00000000273, 5.12740051559, 35371.8872659764],
    [0.00000000306, 5.28903794869, 382.8965322232],
    [0.00000000223, 2.50591724074, 26709.6469424134],
    [0.00000000235, 5.96522395118, 10198.033075026],
    [0.00000000234, 3.52866583267, 10228.538017396],
    [0.00000000224, 6.24561979789, 7064.1213856228],
    [0.00000000251, 2.84739274245, 33019.0211122046],
    [0.00000000196, 1.5061039379, 31749.2351907264],
    [0.00000000192, 1.69321442572, 13341.6743113068],
    [0.0000000018, 6.19353087076, 39793.7602546548],
    [0.00000000199, 1.1643332188, 22805.7355659936],
    [0.0000000018, 3.72646417141, 1551.045222648],
    [0.00000000173, 3.35235705827, 53445.5922046266],
    [0.00000000195, 1.51901264131, 43232.3066584156],
    [0.00000000174, 2.84049662693, 9967.4538999816],
    [0.00000000163, 4.29160537719, 36949.2308084242],
    [0.00000000169, 0.37000676558, 10459.1171924404],
    [0.00000000137, 5.61149803116, 10529.6774158676],
    [0.00000000139, 0.87847805052, 16522.6597160022],
    [0.00000000139, 4.12576475427, 36301.18868778519],
    [0.00000000127, 5.14447758616, 5481.2549188676],
    [0.00000000131, 3.11317801589, 9896.8936765544],
    [0.00000000131, 0.89697384735, 3442.5749449654],
    [0.00000000121, 1.32802112907, 38734.3783244656],
    [0.00000000122, 1.59017183044, 10110.1927719924],
    [0.00000000123, 2.33714216061, 10316.3783204296],
    [0.00000000133, 2.90682399304, 9793.8009023358],
    [0.00000000111, 2.5207763476, 13936.794505134],
    [0.0000000012, 0.36076947165, 536.8045120954],
    [0.00000000115, 2.53355582059, 26735.9452622132],
    [0.00000000108, 2.65839634325, 10232.95530711079],
    [0.00000000108, 0.55230439694, 10193.61578531121],
    [0.00000000138, 1.0691923924, 65236.2212932854],
    [0.00000000101, 3.17012502017, 19317.1925403286],
    [0.00000000127, 5.63110477712, 10288.0671447783],
    [0.00000000127, 3.86278127025, 10138.5039476437],
    [0.00000000137, 2.9335065946, 47162.5163546352],
    [0.00000000095, 5.03917884334, 52175.8062831484],
    [0.00000000094, 0.71308489207, 38500.2760310722],
    [0.00000000092, 5.46204624886, 11764.330768859],
    [0.00000000096, 1.52914774412, 9690.7081281172],
    [0.00000000101, 0.83318284426, 6489.776587288],
    [0.00000000115, 3.76443612245, 522.5774180938],
    [0.00000000089, 2.53312656681, 10735.8629643048],
    [0.00000000082, 0.85628515615, 2379.1644735716],
    [0.00000000103, 5.2268323762, 103.0927742186],
    [0.0000000009, 2.12423586627, 28313.288804661],
    [0.0000000009, 0.39668501735, 9580.5018068978],
    [0.00000000074, 6.0268009555, 3723.508958923],
    [0.00000000081, 5.25045057985, 10419.4710946482],
    [0.0000000008, 4.23724598221, 10007.0999977738],
    [0.00000000091, 2.48874147947, 10846.0692855242],
    [0.00000000085, 3.82784790321, 51868.2486621788],
    [0.00000000081, 2.26235214191, 3903.9113764198],
    [0.00000000097, 0.772950916, 18307.8072320436],
    [0.00000000094, 0.17063414792, 6872.6731195112],
    [0.0000000008, 5.62254102739, 29999.959352319],
    [0.00000000068, 2.7176293667, 16983.9961474566],
    [0.00000000066, 0.76731351736, 20.7753954924],
    [0.00000000075, 0.36155638007, 39302.096962196],
    [0.00000000075, 2.27327165974, 8521.1198767086],
    [0.00000000058, 2.14482855875, 8631.326197928],
    [0.00000000064, 5.83569051301, 2118.7638603784],
    [0.00000000058, 2.98524209824, 19889.76658032659],
    [0.00000000054, 1.78260668333, 40077.61957352],
    [0.00000000055, 4.70485939861, 639.897286314],
    [0.0000000006, 5.8966189292, 41962.5207369374],
    [0.00000000066, 2.24746237999, 74.7815985673],
    [0.00000000061, 3.40726181591, 27490.6924780448],
    [0.00000000051, 3.07811180039, 24150.080051345],
    [0.00000000057, 2.30081371235, 20529.66386664059],
    [0.00000000052, 2.37192464233, 29573.361161443],
    [0.00000000052, 4.76610409132, 57375.8019008462],
    [0.00000000047, 1.61630288856, 30831.3049047446],
    [0.00000000054, 5.89684197257, 19903.99367432819],
    [0.0000000004, 5.32101847424, 42430.4857272918],
    [0.00000000051, 5.29186795569, 29587.5882554446],
];

const B1: &[Term] = &[
    [0.00513347602, 1.80364310797, 10213.285546211],
    [0.000043801, 3.38615711591, 20426.571092422],
    [0.00000196586, 2.53001197486, 30639.856638633],
    [0.00000199162, 0.0, 0.0],
    [0.00000014031, 2.27087044687, 9437.762934887],
    [0.00000012958, 1.50735622957, 18073.7049386502],
    [0.00000011941, 5.60462450426, 1577.3435424478],
    [0.00000010324, 5.24224313355, 2352.8661537718],
    [0.00000009294, 6.07545631303, 22003.9146348698],
    [0.00000007441, 1.50257909439, 11790.6290886588],
    [0.00000008031, 0.29371105198, 9153.9036160218],
    [0.00000007514, 5.0808188599, 10186.9872264112],
    [0.00000004669, 3.87801635015, 10239.5838660108],
    [0.00000004399, 3.58872736593, 40853.142184844],
    [0.00000003975, 1.28397121206, 10404.7338123226],
    [0.00000004657, 0.75073886819, 5507.5532386674],
    [0.00000003783, 4.33004753984, 19651.048481098],
    [0.0000000339, 4.88976070903, 10988.808157535],
    [0.00000003555, 1.25927550356, 19896.8801273274],
    [0.00000003479, 5.5079700216, 529.6909650946],
    [0.00000002884, 0.08549582037, 14143.4952424306],
    [0.00000001786, 0.37134513186, 13367.9726311066],
    [0.000000016, 1.68378002982, 20618.0193585336],
    [0.00000001539, 1.21683853657, 25934.1243310894],
    [0.00000001341, 2.90077139758, 15720.8387848784],
    [0.00000000993, 1.74681248965, 11322.6640983044],
    [0.00000001165, 6.13437155401, 7860.4193924392],
    [0.00000001115, 0.6674369038, 29580.4747084438],
    [0.00000000923, 2.25384969096, 10021.8372800994],
    [0.00000000965, 1.36425494833, 9683.5945811164],
    [0.00000000973, 0.39071758442, 6283.0758499914],
    [0.00000000805, 0.53331923557, 8624.2126509272],
    [0.00000000913, 0.76046003719, 8635.9420037632],
    [0.00000000991, 0.5531987933, 19367.1891622328],
    [0.00000000609, 2.62364470139, 23581.2581773176],
    [0.00000000532, 5.10925676528, 9786.687355335],
    [0.00000000476, 6.17672999981, 11015.1064773348],
    [0.00000000472, 1.696726292, 17298.1823273262],
    [0.00000000503, 2.65840772485, 29864.334027309],
    [0.00000000456, 5.01205315518, 10742.9765113056],
    [0.00000000478, 3.94100005156, 775.522611324],
    [0.00000000477, 3.71554345922, 10596.1820784342],
    [0.00000000347, 2.3455106268, 9411.4646150872],
    [0.00000000458, 2.31894399069, 9999.986450773],
    [0.00000000374, 3.76878356974, 21228.3920235458],
    [0.0000000044, 4.33400244581, 15874.6175953632],
    [0.00000000349, 1.31468836511, 10234.0609417034],
    [0.0000000031, 5.45422332781, 10192.5101507186],
    [0.00000000346, 0.94242286364, 1059.3819301892],
    [0.00000000308, 4.90145899142, 3930.2096962196],
    [0.00000000331, 4.89498986674, 10206.1719992102],
    [0.00000000269, 2.39650266204, 801.8209311238],
    [0.00000000269, 0.00589873499, 9830.3890139878],
    [0.00000000261, 3.48196147279, 7058.5984613154],
    [0.0000000029, 0.10953964861, 29050.7837433492],
    [0.00000000283, 6.12133736787, 20419.45754542119],
    [0.00000000232, 3.0784585003, 12566.1516999828],
    [0.00000000265, 4.02431894973, 33794.5437235286],
    [0.0000000022, 2.37315851889, 4551.9534970588],
    [0.00000000247, 3.07626728158, 28286.9904848612],
    [0.00000000202, 3.56872121409, 21535.9496445154],
    [0.00000000225, 5.7688889632, 213.299095438],
    [0.00000000217, 0.88382111135, 20213.271996984],
    [0.00000000172, 6.12653050186, 9161.0171630226],
    [0.00000000195, 5.472408554, 37724.7534197482],
    [0.00000000153, 4.07656151671, 27511.4678735372],
    [0.00000000174, 1.33676849359, 32217.2001810808],
    [0.00000000157, 5.98474214437, 26.2983197998],
    [0.00000000163, 5.4551913476, 10426.584641649],
    [0.00000000129, 2.08748660996, 3128.3887650958],
    [0.00000000131, 1.51959002513, 10218.8084705184],
    [0.00000000139, 4.42330401713, 10220.3990932118],
    [0.00000000126, 2.62296638037, 22779.4372461938],
    [0.00000000146, 4.69869606856, 25158.6017197654],
    [0.00000000172, 6.13435208788, 18837.49819713819],
    [0.00000000157, 5.44507403858, 4705.7323075436],
    [0.00000000117, 6.18296175153, 20400.2727726222],
    [0.00000000164, 3.30849473132, 51066.427731055],
    [0.00000000113, 3.64412860654, 7.1135470008],
    [0.00000000109, 5.21220660788, 8662.240323563],
    [0.00000000133, 1.78047296245, 191.4482661116],
    [0.00000000117, 0.14681677884, 9146.790069021],
    [0.00000000116, 0.61940521198, 41654.9631159678],
    [0.00000000096, 1.49631428731, 7084.8967811152],
    [0.00000000096, 1.21744230443, 10198.033075026],
    [0.00000000082, 1.45863866349, 10207.7626219036],
    [0.00000000085, 6.04057728058, 21202.093703746],
    [0.00000000083, 0.19985600927, 14919.0178537546],
    [0.00000000077, 5.5013231061, 5661.3320491522],
    [0.00000000077, 2.00173927326, 10228.538017396],
    [0.00000000093, 1.85466268819, 45585.1728121874],
    [0.00000000066, 3.25826124156, 1109.3785520934],
    [0.00000000089, 0.64100435648, 3154.6870848956],
    [0.00000000061, 3.80043027736, 11272.6674764002],
    [0.00000000077, 1.8551635895, 3532.0606928114],
    [0.00000000062, 0.81341290651, 382.8965322232],
    [0.00000000072, 2.35312965005, 9103.9069941176],
    [0.00000000053, 3.21969389511, 20452.8694122218],
    [0.00000000067, 1.42090542131, 24356.7807886416],
    [0.00000000056, 2.97733070198, 30110.1656735384],
    [0.00000000051, 4.22406663447, 20809.4676246452],
    [0.00000000058, 6.20761936031, 29088.811415985],
    [0.00000000061, 3.27309494322, 49515.382508407],
    [0.00000000046, 5.49443476235, 31441.6775697568],
    [0.0000000005, 4.16651052942, 13341.6743113068],
    [0.00000000047, 1.25473247769, 33019.0211122046],
    [0.00000000047, 2.03402044389, 23958.6317852334],
    [0.00000000036, 5.24409311105, 3149.1641605882],
    [0.00000000038, 4.15337829669, 18849.2275499742],
    [0.00000000042, 0.43005959574, 1589.0728952838],
    [0.00000000041, 1.21289342964, 12592.4500197826],
    [0.00000000038, 5.91928287144, 28521.0927782546],
    [0.00000000033, 3.98241699279, 4732.0306273434],
    [0.00000000035, 2.24417218267, 16496.3613962024],
    [0.0000000004, 6.13293942728, 26087.9031415742],
    [0.00000000044, 1.7812329486, 426.598190876],
    [0.00000000041, 3.16744909855, 39264.0692895602],
    [0.00000000033, 4.96183427323, 536.8045120954],
    [0.00000000034, 0.12963030501, 30213.258447757],
    [0.00000000036, 5.41167321573, 522.5774180938],
    [0.00000000027, 4.44250239485, 17277.4069318338],
    [0.00000000034, 5.94541303751, 9929.4262273458],
    [0.00000000033, 0.40689057274, 10497.1448650762],
    [0.00000000023, 2.59067946967, 10175.2578735752],
    [0.00000000022, 0.69625017371, 19999.97290154599],
    [0.00000000023, 3.76162101633, 10251.3132188468],
    [0.00000000023, 0.62711494266, 35371.8872659764],
    [0.00000000022, 4.64142978776, 19889.76658032659],
    [0.0000000002, 4.01315480107, 26709.6469424134],
    [0.0000000002, 4.0334440068, 29573.361161443],
    [0.00000000023, 0.90416640595, 8094.5216858326],
    [0.00000000022, 1.92092469688, 17085.9586657222],
    [0.00000000019, 5.04938942644, 6681.2248533996],
];

const B2: &[Term] = &[
    [0.00022377665, 3.38509143877, 10213.285546211],
    [0.00000281739, 0.0, 0.0],
    [0.00000173164, 5.25563766915, 20426.571092422],
    [0.00000026945, 3.87040891568, 30639.856638633],
    [0.00000001174, 0.09768632072, 10186.9872264112],
    [0.00000000685, 3.19139067811, 11790.6290886588],
    [0.00000000788, 4.36515965295, 10239.5838660108],
    [0.00000000592, 5.22270440328, 40853.142184844],
    [0.00000000515, 6.12821215207, 10988.808157535],
    [0.00000000538, 0.57550272342, 2352.8661537718],
    [0.0000000054, 3.11657836329, 18073.7049386502],
    [0.00000000454, 2.79306867629, 10404.7338123226],
    [0.00000000374, 6.10468482446, 9437.762934887],
    [0.00000000431, 4.00778431184, 1577.3435424478],
    [0.0000000036, 6.0174784232, 19651.048481098],
    [0.00000000375, 1.31319959789, 22003.9146348698],
    [0.00000000354, 5.12509281266, 9153.9036160218],
    [0.0000000015, 4.58623687118, 15720.8387848784],
    [0.00000000164, 5.41790158607, 5507.5532386674],
    [0.00000000159, 2.78191550878, 19896.8801273274],
    [0.00000000157, 0.65774905071, 529.6909650946],
    [0.00000000155, 2.54824315372, 9683.5945811164],
    [0.00000000109, 2.01866665583, 14143.4952424306],
    [0.00000000106, 2.28289033017, 6283.0758499914],
    [0.00000000115, 3.23636374193, 20618.0193585336],
    [0.00000000128, 5.32400510939, 13367.9726311066],
    [0.00000000087, 3.28265082435, 11322.6640983044],
    [0.0000000009, 5.23585072275, 10596.1820784342],
    [0.00000000055, 4.82369879741, 7058.5984613154],
    [0.00000000044, 0.58444963462, 10206.1719992102],
    [0.00000000044, 2.34401612969, 19367.1891622328],
    [0.00000000038, 4.55053233088, 9999.986450773],
    [0.00000000039, 5.84340580032, 10220.3990932118],
    [0.00000000036, 4.41006216127, 51066.427731055],
    [0.00000000039, 3.14348236386, 9411.4646150872],
    [0.00000000033, 4.5574866034, 10742.9765113056],
    [0.00000000037, 2.79630938717, 25934.1243310894],
    [0.00000000034, 0.55287110072, 11015.1064773348],
    [0.00000000034, 2.25809144959, 29580.4747084438],
    [0.00000000038, 1.88638747393, 801.8209311238],
    [0.00000000034, 1.22706917271, 10021.8372800994],
    [0.00000000027, 4.83867137637, 9830.3890139878],
    [0.00000000027, 4.3114017935, 23581.2581773176],
    [0.00000000027, 2.17187621336, 8635.9420037632],
    [0.0000000002, 5.66581696952, 21228.3920235458],
    [0.00000000024, 2.1720810785, 18849.2275499742],
    [0.0000000002, 5.29318634138, 775.522611324],
    [0.00000000019, 2.73486845601, 3128.3887650958],
    [0.00000000013, 3.40362915274, 1059.3819301892],
    [0.00000000014, 0.05074160195, 7860.4193924392],
    [0.00000000014, 5.43035907265, 26.2983197998],
    [0.00000000012, 3.24834347355, 9103.9069941176],
    [0.00000000013, 5.04826725887, 7.1135470008],
    [0.00000000015, 1.42027402522, 29050.7837433492],
    [0.0000000001, 4.9813806749, 10426.584641649],
    [0.00000000011, 0.85773045784, 17298.1823273262],
    [0.00000000011, 4.23048200054, 29864.334027309],
    [0.0000000001, 0.26447399758, 3930.2096962196],
    [0.00000000011, 1.46728576671, 20419.45754542119],
];

const B3: &[Term] = &[
    [0.00000646671, 4.99166565277, 10213.285546211],
    [0.00000019952, PI, 0.0],
    [0.0000000554, 0.77376923951, 20426.571092422],
    [0.00000002526, 5.4449376302, 30639.856638633],
    [0.00000000079, 1.51447613604, 10186.9872264112],
    [0.00000000056, 0.63647808442, 40853.142184844],
    [0.00000000058, 5.7073117655, 10239.5838660108],
    [0.00000000031, 4.72523061067, 11790.6290886588],
    [0.00000000026, 1.02068113372, 10988.808157535],
    [0.00000000025, 5.60599130442, 9437.762934887],
    [0.00000000017, 2.05293621864, 2352.8661537718],
    [0.00000000011, 4.33056892256, 10404.7338123226],
    [0.00000000009, 1.36283915068, 19651.048481098],
    [0.00000000007, 4.69592781899, 18073.7049386502],
    [0.00000000006, 2.97926526705, 22003.9146348698],
];

const B4: &[Term] = &[
    [0.00000014102, 0.31537190181, 10213.285546211],
    [0.0000000019, 2.35466404492, 20426.571092422],
    [0.00000000164, 0.74476215141, 30639.856638633],
    [0.00000000214, PI, 0.0],
    [0.00000000004, 2.34190883009, 40853.142184844],
];

const B5: &[Term] = &[
    [0.00000000239, 2.05201727566, 10213.285546211],
    [0.00000000039, 0.0, 0.0],
    [0.00000000011, 3.82500275251, 20426.571092422],
    [0.00000000009, 2.32953116868, 30639.856638633],
];

const R0: &[Term] = &[
    [0.72334820905, 0.0, 0.0],
    [0.00489824185, 4.02151832268, 10213.285546211],
    [0.00001658058, 4.90206728012, 20426.571092422],
    [0.00001632093, 2.84548851892, 7860.4193924392],
    [0.00001378048, 1.128465906, 11790.6290886588],
    [0.00000498399, 2.58682187717, 9683.5945811164],
    [0.00000373958, 1.42314837063, 3930.2096962196],
    [0.00000263616, 5.5293818592, 9437.762934887],
    [0.00000237455, 2.55135903978, 15720.8387848784],
    [0.00000221983, 2.01346776772, 19367.1891622328],
    [0.00000119467, 3.01975365264, 10404.7338123226],
    [0.00000125896, 2.72769833559, 1577.3435424478],
    [0.00000076178, 1.59577224486, 9153.9036160218],
    [0.00000085336, 3.98607953754, 19651.048481098],
    [0.00000074347, 4.11957854039, 5507.5532386674],
    [0.00000041904, 1.64273363458, 18837.49819713819],
    [0.00000042493, 3.81864530735, 13367.9726311066],
    [0.0000003943, 5.39019422358, 23581.2581773176],
    [0.00000029042, 5.67739528728, 5661.3320491522],
    [0.00000027555, 5.72392407794, 775.522611324],
    [0.00000027283, 4.82151812709, 11015.1064773348],
    [0.00000031274, 2.31806719544, 9999.986450773],
    [0.000000197, 4.96157560245, 11322.6640983044],
    [0.00000019809, 0.53189326492, 27511.4678735372],
    [0.00000013567, 3.75530870628, 18073.7049386502],
    [0.00000012921, 1.13381083556, 10206.1719992102],
    [0.00000016215, 0.5645383429, 529.6909650946],
    [0.00000011821, 5.09025877427, 3154.6870848956],
    [0.00000011728, 0.23432298744, 7084.8967811152],
    [0.00000013079, 5.24353197586, 17298.1823273262],
    [0.0000001318, 3.37207825651, 13745.3462390224],
    [0.00000009097, 3.07004895769, 1109.3785520934],
    [0.00000010818, 2.45024712908, 10239.5838660108],
    [0.00000011438, 4.56838894696, 29050.7837433492],
    [0.00000008377, 5.78327612352, 30639.856638633],
    [0.00000008193, 1.9502311186, 22003.9146348698],
    [0.00000009308, 1.61615909286, 2352.8661537718],
    [0.00000010652, 1.9552839614, 31441.6775697568],
    [0.00000010357, 1.20234990061, 15874.6175953632],
    [0.00000009585, 1.46639856228, 19999.97290154599],
    [0.00000006506, 2.17390732263, 14143.4952424306],
    [0.00000007562, 1.13789564977, 8624.2126509272],
    [0.00000006434, 0.84419623033, 6283.0758499914],
    [0.00000005898, 0.0109373111, 8635.9420037632],
    [0.00000005632, 3.94956548631, 12566.1516999828],
    [0.00000005523, 1.27394296557, 18307.8072320436],
    [0.00000004488, 2.47835729057, 191.4482661116],
    [0.00000004529, 4.730277704, 19896.8801273274],
    [0.00000006193, 3.25881250939, 6872.6731195112],
    [0.0000000607, 0.35337419942, 21228.3920235458],
    [0.00000004315, 2.59737099519, 4551.9534970588],
    [0.00000006005, 3.37874723475, 35371.8872659764],
    [0.00000003852, 1.01162850357, 9786.687355335],
    [0.00000004033, 0.0005085558, 801.8209311238],
    [0.0000000392, 5.56542869407, 10596.1820784342],
    [0.00000002709, 5.80195530112, 7064.1213856228],
    [0.00000003216, 0.39767254848, 10186.9872264112],
    [0.00000003089, 6.26174762876, 14945.3161735544],
    [0.00000002982, 4.21196716354, 28521.0927782546],
    [0.00000003284, 0.70709821006, 10742.9765113056],
    [0.00000003484, 4.79878191875, 39302.096962196],
    [0.00000003172, 1.80518954174, 25158.6017197654],
    [0.00000002463, 0.68708153678, 10988.808157535],
    [0.00000002374, 3.77948685343, 21535.9496445154],
    [0.00000002198, 2.82996372521, 8662.240323563],
    [0.00000001958, 5.41763804167, 16496.3613962024],
    [0.00000001876, 2.63426768393, 29580.4747084438],
    [0.00000001902, 2.85782199133, 3532.0606928114],
    [0.00000001706, 3.67573010379, 26.2983197998],
    [0.00000001817, 0.41611036449, 4705.7323075436],
    [0.00000001858, 1.50368318296, 10021.8372800994],
    [0.00000002087, 6.22112874639, 43232.3066584156],
    [0.0000000195, 2.21447019683, 19786.67380610799],
    [0.00000001497, 0.00134773824, 17277.4069318338],
    [0.00000001819, 3.23144993268, 29088.811415985],
    [0.00000001423, 5.85979618707, 9676.4810341156],
    [0.00000001223, 5.55818994329, 6770.7106012456],
    [0.0000000114, 5.92088900094, 13936.794505134],
    [0.00000001484, 2.47665429253, 31749.2351907264],
    [0.00000001185, 1.42087628351, 4732.0306273434],
    [0.00000001323, 2.48821075422, 9690.7081281172],
    [0.00000001249, 1.88323673734, 19374.3027092336],
    [0.0000000127, 5.24647873116, 19360.07561523199],
    [0.00000001402, 5.17536780118, 10316.3783204296],
    [0.00000001042, 3.05454698508, 25934.1243310894],
    [0.00000001174, 1.42913732999, 18875.525869774],
    [0.00000001278, 1.35747287297, 47162.5163546352],
    [0.00000000917, 6.26337648765, 20618.0193585336],
    [0.00000000905, 1.12740203561, 12592.4500197826],
    [0.00000001093, 4.64451720605, 33019.0211122046],
    [0.00000001014, 1.09259406433, 1059.3819301892],
    [0.00000000783, 2.02118183873, 24356.7807886416],
    [0.00000000779, 0.4158527401, 3340.6124266998],
    [0.000000007, 1.14936815714, 16983.9961474566],
    [0.00000000878, 0.87852464964, 38734.3783244656],
    [0.00000000623, 0.89976912165, 17778.11626694899],
    [0.00000000608, 1.58476225197, 9573.388259897],
    [0.000000008, 3.94213003073, 10138.5039476437],
    [0.0000000076, 1.31851313748, 9967.4538999816],
    [0.00000000802, 2.78173370208, 51092.7260508548],
    [0.00000000664, 4.458646824, 3128.3887650958],
    [0.00000000674, 5.11214939998, 382.8965322232],
    [0.0000000053, 0.85392938403, 10234.0609417034],
    [0.00000000509, 3.56809374595, 28286.9904848612],
    [0.000000006, 4.25927726907, 41962.5207369374],
    [0.00000000601, 5.78144137895, 213.299095438],
    [0.00000000595, 2.83045104588, 22805.7355659936],
    [0.00000000673, 6.06079908421, 36949.2308084242],
    [0.00000000535, 5.85422519711, 9103.9069941176],
    [0.00000000544, 5.448060748, 3723.508958923],
    [0.00000000492, 3.83802404893, 27991.40181316],
    [0.00000000635, 0.76494024849, 8094.5216858326],
    [0.00000000434, 6.22214487735, 27197.2816936676],
    [0.00000000459, 3.55062885479, 20213.271996984],
    [0.00000000398, 6.16269975784, 10426.584641649],
    [0.00000000378, 2.41665947591, 18844.61174413899],
    [0.00000000421, 4.86552697954, 9146.790069021],
    [0.000000005, 4.20351458644, 55022.9357470744],
    [0.00000000404, 4.95834410782, 37410.5672398786],
    [0.00000000402, 2.97963246945, 10220.3990932118],
    [0.00000000464, 2.59869499733, 18734.4054229196],
    [0.00000000352, 0.08963076359, 10103.0792249916],
    [0.00000000348, 4.90260339364, 18830.38465013739],
    [0.00000000338, 3.22520096478, 24150.080051345],
    [0.00000000375, 6.17532088136, 26087.9031415742],
    [0.00000000425, 1.2005257828, 40879.4405046438],
    [0.00000000408, 3.12833060705, 9050.8108418032],
    [0.00000000385, 1.94284690176, 283.8593188652],
    [0.00000000337, 4.87838699272, 12432.0426503978],
    [0.00000000326, 4.27369741426, 26735.9452622132],
    [0.00000000309, 0.50597475053, 38204.687359371],
    [0.00000000329, 3.88430599153, 29864.334027309],
    [0.00000000313, 1.36138752543, 10192.5101507186],
    [0.00000000347, 3.58439807209, 27490.6924780448],
    [0.00000000251, 3.78618457047, 10063.7223490764],
    [0.00000000244, 3.83523342668, 9411.4646150872],
    [0.00000000281, 4.50895206233, 32217.2001810808],
    [0.00000000237, 0.87748812245, 6681.2248533996],
    [0.00000000315, 5.62657778233, 58953.145443294],
    [0.00000000311, 4.15626121491, 10175.1525105732],
    [0.00000000247, 2.53637594113, 16522.6597160022],
    [0.00000000219, 5.08729383251, 7058.5984613154],
    [0.00000000291, 3.72567217056, 29999.959352319],
    [0.00000000267, 2.97685503991, 19573.37471066999],
    [0.0000000028, 3.70200084294, 47623.8527860896],
    [0.00000000239, 3.94545782067, 9580.5018068978],
    [0.00000000246, 2.1824488393, 9161.0171630226],
    [0.00000000253, 2.69506547016, 3442.5749449654],
    [0.00000000265, 2.62811801237, 44809.6502008634],
    [0.00000000194, 4.78926136175, 33794.5437235286],
    [0.00000000187, 3.65620881095, 20452.8694122218],
    [0.00000000224, 2.43601863127, 9992.8729037722],
    [0.00000000193, 2.55112161845, 2379.1644735716],
    [0.00000000201, 1.90356905733, 1551.045222648],
    [0.00000000176, 4.29837616553, 10137.0194749354],
    [0.00000000184, 6.16061560223, 36147.4098773004],
    [0.00000000175, 2.7198479704, 20809.4676246452],
    [0.00000000186, 2.55098927966, 14919.0178537546],
    [0.00000000161, 4.13272567123, 23958.6317852334],
    [0.00000000221, 4.83552377614, 20277.0078952874],
    [0.0000000016, 1.81472642729, 10787.6303445458],
    [0.00000000199, 5.7425979833, 30666.1549584328],
    [0.0000000016, 4.46270605493, 18947.7045183576],
    [0.00000000187, 2.98688597588, 2218.7571041868],
    [0.00000000189, 5.34607810282, 10007.0999977738],
    [0.00000000198, 0.77846666692, 62883.3551395136],
    [0.00000000144, 5.00261963924, 9264.1099372412],
    [0.00000000171, 2.05212624568, 7255.5696517344],
    [0.00000000188, 4.08173534559, 48739.859897083],
    [0.00000000146, 3.94191715702, 6309.3741697912],
    [0.00000000146, 5.06313558118, 39264.0692895602],
    [0.00000000135, 5.93689169614, 37724.7534197482],
    [0.00000000139, 2.81266025896, 20.7753954924],
    [0.00000000177, 5.16224804657, 9835.9119382952],
    [0.00000000119, 1.37254262864, 40077.61957352],
    [0.0000000012, 0.21443767468, 31022.7531708562],
    [0.00000000128, 2.92458887798, 7.1135470008],
    [0.0000000015, 5.73646272556, 632.7837393132],
    [0.00000000106, 0.62224833817, 11272.6674764002],
    [0.00000000114, 2.6330132652, 17468.8551979454],
    [0.00000000123, 6.22518843711, 53285.1848352418],
    [0.00000000107, 1.172589789, 43071.8992890308],
    [0.00000000103, 1.09613781581, 41654.9631159678],
    [0.00000000109, 2.01412667085, 20419.45754542119],
    [0.00000000102, 4.23406964348, 10251.3132188468],
    [0.00000000116, 1.27731728606, 10199.0584522094],
    [0.00000000103, 5.25887538465, 9830.3890139878],
    [0.00000000112, 2.24436894064, 18204.71445782499],
    [0.00000000111, 2.23547857955, 8521.1198767086],
    [0.00000000118, 0.237542072, 10497.1448650762],
    [0.00000000123, 0.88054816668, 34596.3646546524],
    [0.00000000102, 4.3943864662, 18300.69368504279],
    [0.00000000131, 6.01711652115, 9367.2027114598],
    [0.000000001, 5.00532389609, 10175.2578735752],
    [0.00000000107, 0.41270197502, 40853.142184844],
    [0.00000000132, 5.45008342761, 11506.7697697936],
    [0.00000000098, 1.07722950958, 13553.8979729108],
    [0.00000000094, 2.9172009759, 44007.8292697396],
    [0.00000000097, 1.04004223634, 68050.42387851159],
    [0.00000000127, 2.20215372683, 66813.5648357332],
    [0.00000000111, 1.57823839032, 29043.67019634839],
    [0.00000000118, 2.3326817689, 18314.9207790444],
    [0.0000000009, 2.42353056125, 32858.61374281979],
    [0.00000000109, 3.82796787296, 19470.28193645139],
    [0.00000000111, 4.47666957576, 29057.89729034999],
    [0.00000000101, 3.4152849366, 19264.0963880142],
    [0.00000000092, 3.66289799512, 22645.32819660879],
    [0.00000000094, 6.07530805791, 10846.0692855242],
    [0.00000000114, 4.02718653431, 7576.560073574],
    [0.00000000087, 6.01842459303, 17085.9586657222],
    [0.00000000109, 5.46886607309, 52670.0695933026],
    [0.00000000107, 0.54805946713, 34363.365597556],
    [0.00000000108, 5.44460610707, 19050.7972925762],
    [0.00000000076, 6.15177368654, 27682.1407441564],
    [0.00000000107, 4.80525404063, 8144.2787113044],
    [0.00000000073, 1.60549217847, 20956.2620575166],
    [0.00000000097, 5.1354205113, 22779.4372461938],
    [0.00000000068, 2.31300447144, 8631.326197928],
    [0.00000000091, 4.28652743953, 10110.1927719924],
    [0.00000000093, 5.27290609264, 522.5774180938],
    [0.00000000071, 3.6556596169, 11764.330768859],
    [0.00000000089, 1.79712963206, 45585.1728121874],
    [0.00000000067, 2.25900071584, 9360.089164459],
    [0.00000000085, 0.67062144972, 56600.2792895222],
    [0.0000000008, 1.58278081077, 19992.85935454519],
    [0.00000000065, 6.23472325597, 10419.4710946482],
    [0.00000000064, 0.53356325917, 17248.4253018544],
    [0.00000000085, 4.52011215904, 29786.660256881],
    [0.00000000068, 4.48235266554, 10632.7701900862],
    [0.00000000064, 4.33495700921, 47938.0389659592],
    [0.00000000071, 3.03858484137, 11787.1059703098],
    [0.00000000087, 4.81823063172, 2107.0345075424],
    [0.0000000007, 2.35648061034, 11794.1522070078],
    [0.0000000008, 2.33248094128, 38526.574350872],
    [0.0000000007, 3.704540611, 8734.4189721466],
    [0.00000000077, 4.49569185467, 20007.0864485468],
    [0.00000000072, 1.19410424468, 10217.2176994741],
    [0.00000000068, 2.01841060183, 14128.2427712456],
    [0.00000000064, 5.39293951654, 7880.08915333899],
    [0.00000000066, 3.20467071127, 14765.2390432698],
    [0.0000000008, 3.4162045777, 48417.97290558199],
    [0.0000000008, 3.39651161571, 245.8316462294],
    [0.00000000066, 5.85414440204, 9793.8009023358],
    [0.00000000082, 3.62592908644, 70743.77453195279],
    [0.00000000058, 4.95174942212, 30110.1656735384],
    [0.00000000079, 6.24161471033, 6037.244203762],
    [0.00000000069, 5.50183658445, 19793.7873531088],
    [0.00000000056, 1.24148350566, 10207.7626219036],
    [0.0000000007, 2.45123308846, 10218.8084705184],
    [0.00000000064, 5.53983104501, 10735.8629643048],
    [0.00000000054, 3.6225971324, 27461.7108480654],
    [0.00000000073, 1.75882480924, 1589.0728952838],
    [0.00000000075, 3.38244819846, 4214.0690150848],
    [0.00000000054, 0.64971567468, 9929.4262273458],
    [0.00000000054, 3.4095963723, 18418.01355326299],
    [0.00000000056, 3.65815006538, 14169.7935622304],
    [0.00000000056, 0.71243223808, 9896.8936765544],
    [0.00000000052, 1.3334813194, 20400.2727726222],
    [0.00000000067, 3.128065954, 5481.2549188676],
    [0.00000000058, 0.54482893546, 28313.288804661],
    [0.00000000054, 0.15603935681, 19580.4882576708],
    [0.00000000051, 3.3751547351, 9256.9963902404],
    [0.00000000063, 3.3884897095, 49515.382508407],
    [0.00000000069, 4.90917651401, 63498.47038145279],
    [0.00000000057, 5.0743774203, 18521.1063274816],
    [0.0000000005, 1.59156823654, 18631.31264870099],
    [0.00000000054, 6.25816208666, 37674.9963942764],
    [0.00000000057, 5.48065460919, 24383.0791084414],
    [0.00000000045, 1.1046649066, 10408.2569306716],
    [0.00000000051, 3.61196470313, 426.598190876],
    [0.00000000057, 2.09567711267, 60530.4889857418],
    [0.0000000006, 5.94659889997, 13897.6635962012],
    [0.00000000051, 5.4723851772, 57837.1383323006],
    [0.00000000051, 2.32438478428, 19779.56025910719],
    [0.00000000052, 3.23766328818, 18940.59097135679],
    [0.00000000043, 5.74921510909, 51868.2486621788],
    [0.00000000048, 1.12206254877, 9779.5738083342],
    [0.00000000058, 3.08646083897, 12074.488407524],
    [0.00000000046, 4.07536026888, 7863.9425107882],
    [0.00000000045, 4.75746520642, 7856.89627409019],
    [0.00000000054, 4.43528236634, 8617.0991039264],
    [0.0000000005, 3.70569982975, 42456.7840470916],
    [0.00000000044, 1.29248911155, 69166.430989505],
    [0.00000000046, 0.41229872114, 7564.830720738],
    [0.00000000044, 6.17937388307, 13341.6743113068],
    [0.00000000053, 4.71388531889, 53445.5922046266],
    [0.00000000041, 3.48003037828, 37895.4262903674],
    [0.0000000004, 1.2330554626, 10228.538017396],
    [0.00000000053, 5.04979874661, 74673.9842281724],
    [0.00000000039, 1.36646013032, 21202.093703746],
    [0.00000000039, 2.15376025201, 8947.7180675846],
    [0.00000000041, 6.1753298446, 65236.2212932854],
    [0.00000000052, 1.29052331493, 90394.82301305079],
    [0.00000000039, 0.70253732683, 18093.37469954999],
    [0.00000000052, 1.18164377451, 10211.8010735027],
    [0.00000000047, 1.78672260794, 10401.2106939736],
    [0.0000000004, 3.66961416802, 10198.033075026],
    [0.00000000051, 2.71698589018, 94325.0327092704],
    [0.00000000036, 1.2509171162, 10323.4918674304],
    [0.00000000049, 1.2133595942, 9721.6222537522],
    [0.00000000042, 6.05968230173, 105460.99111839019],
    [0.00000000046, 5.06978748275, 20350.3050211464],
    [0.0000000004, 1.97645050921, 32243.4985008806],
    [0.00000000036, 4.96702216961, 36301.18868778519],
    [0.00000000037, 5.29642935562, 38.0276726358],
    [0.00000000039, 0.52064327313, 26709.6469424134],
    [0.00000000035, 2.34112124655, 58946.51688439399],
    [0.00000000034, 1.82989750626, 17675.0234927304],
    [0.00000000034, 0.7649366411, 55798.4583583984],
    [0.00000000035, 1.09353675147, 69159.80243060499],
    [0.00000000031, 5.59148330297, 10639.883737087],
    [0.00000000032, 3.3296078187, 71519.2971432768],
    [0.00000000031, 5.98191446392, 24341.5283174566],
    [0.00000000031, 0.68615213145, 10202.2398459471],
    [0.0000000003, 4.42039942947, 10459.1171924404],
    [0.00000000029, 1.30367701539, 20103.06567576459],
    [0.00000000031, 4.51793347997, 2957.7158944766],
    [0.00000000035, 4.0563432129, 19903.99367432819],
    [0.0000000003, 1.32113757427, 574.3447983348],
    [0.00000000029, 3.36506645849, 10288.0671447783],
    [0.00000000029, 1.40019042576, 9988.9407505091],
    [0.00000000032, 0.21932095318, 24978.5245894808],
    [0.00000000034, 5.22945947227, 8673.969676399],
    [0.00000000039, 4.50883171158, 16004.6981037436],
    [0.00000000028, 2.32945945641, 11392.4800852506],
    [0.00000000034, 3.92498967835, 536.8045120954],
    [0.00000000032, 5.46972716255, 64607.84893354619],
    [0.00000000028, 2.38858990128, 20235.1228263104],
    [0.0000000003, 3.34585843979, 39793.7602546548],
    [0.00000000026, 5.36096904409, 1478.8665740644],
];

const R1: &[Term] = &[
    [0.00034551039, 0.89198710598, 10213.285546211],
    [0.00000234203, 1.77224942714, 20426.571092422],
    [0.00000233998, PI, 0.0],
    [0.00000023864, 1.11274502648, 9437.762934887],
    [0.00000010568, 4.59168210921, 1577.3435424478],
    [0.00000009124, 4.53540907003, 10404.7338123226],
    [0.00000006599, 5.97703999838, 5507.5532386674],
    [0.00000004667, 3.87683960551, 9153.9036160218],
    [0.0000000384, 5.66196924375, 13367.9726311066],
    [0.00000002666, 2.82413291285, 10206.1719992102],
    [0.00000002194, 2.05314419626, 775.522611324],
    [0.00000002094, 2.55137285015, 18837.49819713819],
    [0.00000001782, 2.64808558644, 30639.856638633],
    [0.00000001845, 1.87612936641, 11015.1064773348],
    [0.00000001303, 0.20613045603, 11322.6640983044],
    [0.00000001169, 0.79431893441, 17298.1823273262],
    [0.00000001001, 6.16555101536, 10239.5838660108],
    [0.00000000915, 4.59854496966, 1109.3785520934],
    [0.00000000884, 0.66706834422, 18073.7049386502],
    [0.00000000849, 5.5864157194, 12566.1516999828],
    [0.00000001071, 4.94792017474, 6283.0758499914],
    [0.00000000887, 2.47785193216, 3154.6870848956],
    [0.00000000904, 0.81413053841, 10596.1820784342],
    [0.00000000818, 0.90016838097, 5661.3320491522],
    [0.00000000845, 5.48504338112, 529.6909650946],
    [0.00000000824, 3.74837629121, 7084.8967811152],
    [0.00000000652, 5.07444932607, 22003.9146348698],
    [0.00000000847, 0.44119876869, 8635.9420037632],
    [0.00000000638, 4.10125791268, 191.4482661116],
    [0.00000000615, 3.14417599741, 10186.9872264112],
    [0.00000000527, 5.86792949279, 2352.8661537718],
    [0.0000000052, 5.33201358267, 14143.4952424306],
    [0.00000000576, 2.25212731258, 21228.3920235458],
    [0.00000000662, 2.86880467345, 8624.2126509272],
    [0.00000000554, 2.17186191243, 18307.8072320436],
    [0.00000000515, 4.34331395104, 9786.687355335],
    [0.00000000501, 5.56479589366, 10742.9765113056],
    [0.00000000426, 1.0216144312, 7064.1213856228],
    [0.00000000418, 1.26803034691, 9676.4810341156],
    [0.00000000391, 0.78974645621, 9690.7081281172],
    [0.00000000334, 3.18175822557, 10988.808157535],
    [0.00000000375, 0.66142254036, 19360.07561523199],
    [0.00000000364, 0.19369831864, 19374.3027092336],
    [0.00000000313, 1.09734397626, 4551.9534970588],
    [0.0000000033, 0.58817502306, 16496.3613962024],
    [0.00000000339, 5.76768761396, 10021.8372800994],
    [0.00000000291, 3.65846764668, 25158.6017197654],
    [0.00000000223, 4.33581625553, 19786.67380610799],
    [0.00000000266, 3.57408827667, 801.8209311238],
    [0.00000000274, 5.73346687248, 11790.6290886588],
    [0.00000000275, 5.65814317085, 19896.8801273274],
    [0.00000000212, 4.27038489878, 4705.7323075436],
    [0.0000000023, 6.1340634559, 1059.3819301892],
    [0.00000000204, 4.87348390351, 7860.4193924392],
    [0.00000000241, 1.13551531894, 26.2983197998],
    [0.00000000206, 0.31907973682, 382.8965322232],
    [0.00000000216, 2.54741101724, 19651.048481098],
    [0.00000000212, 3.15264941106, 14945.3161735544],
    [0.00000000163, 1.13604744392, 13936.794505134],
    [0.00000000151, 5.11341268743, 28521.0927782546],
    [0.00000000151, 0.81278755582, 6770.7106012456],
    [0.0000000015, 5.02227334847, 29088.811415985],
    [0.00000000146, 1.37568138685, 10220.3990932118],
    [0.00000000127, 4.49298610074, 3532.0606928114],
    [0.00000000121, 6.26589208179, 29580.4747084438],
    [0.00000000147, 6.16092774714, 8662.240323563],
    [0.00000000114, 0.00114012635, 25934.1243310894],
    [0.00000000115, 3.56897715344, 24356.7807886416],
    [0.00000000124, 0.67547060274, 3723.508958923],
    [0.00000000145, 0.36415036222, 9146.790069021],
    [0.00000000104, 4.27865011376, 9573.388259897],
    [0.00000000136, 5.09581116181, 19367.1891622328],
    [0.00000000102, 1.53637788668, 17277.4069318338],
    [0.00000000117, 0.57543238496, 9999.986450773],
    [0.00000000092, 0.22936081655, 18830.38465013739],
    [0.00000000112, 4.04771058036, 9103.9069941176],
    [0.00000000098, 3.78447692407, 213.299095438],
    [0.00000000085, 5.84471458481, 10234.0609417034],
    [0.00000000079, 0.64440357793, 18844.61174413899],
    [0.00000000084, 0.56950139213, 9683.5945811164],
    [0.00000000107, 1.77067111589, 17778.11626694899],
    [0.00000000081, 6.19048382717, 20618.0193585336],
    [0.00000000087, 0.15771136594, 33019.0211122046],
    [0.00000000082, 4.80683817059, 3930.2096962196],
    [0.00000000086, 2.21505615071, 8094.5216858326],
    [0.00000000064, 2.69215119482, 16983.9961474566],
    [0.00000000069, 0.83385751986, 3128.3887650958],
    [0.00000000081, 4.88025042367, 4732.0306273434],
    [0.00000000059, 3.34348033725, 10787.6303445458],
    [0.00000000061, 0.04044699966, 9161.0171630226],
    [0.00000000064, 4.13127333938, 9992.8729037722],
    [0.0000000006, 6.24603986632, 32217.2001810808],
    [0.00000000054, 3.38449893196, 10426.584641649],
    [0.00000000054, 5.15939119644, 28286.9904848612],
    [0.00000000063, 4.32339245083, 12592.4500197826],
    [0.0000000006, 4.4875384617, 18875.525869774],
    [0.00000000057, 3.64912085313, 10007.0999977738],
    [0.00000000049, 5.10267262491, 19573.37471066999],
    [0.00000000047, 5.79444960738, 68050.42387851159],
    [0.00000000052, 3.56658420552, 7255.5696517344],
    [0.0000000005, 1.61783309819, 36949.2308084242],
    [0.00000000053, 2.64370544855, 15874.6175953632],
    [0.0000000004, 3.93466530964, 20419.45754542119],
    [0.00000000051, 0.79154899901, 23581.2581773176],
    [0.00000000038, 1.77428239418, 10103.0792249916],
    [0.00000000049, 1.12423644455, 3442.5749449654],
    [0.0000000004, 5.22874487975, 21535.9496445154],
    [0.00000000038, 1.12473430132, 7.1135470008],
    [0.00000000038, 0.11510547453, 11272.6674764002],
    [0.00000000036, 2.02476324983, 7058.5984613154],
    [0.00000000047, 0.0558943239, 12432.0426503978],
    [0.00000000034, 3.45481114998, 9830.3890139878],
    [0.00000000045, 4.59817214088, 10192.5101507186],
    [0.00000000037, 4.93959675364, 3340.6124266998],
    [0.00000000044, 0.70533027806, 20213.271996984],
    [0.00000000034, 2.16487642765, 64460.6986819614],
    [0.00000000031, 1.57612397319, 36147.4098773004],
    [0.00000000028, 2.56454760402, 94138.32702008578],
    [0.00000000033, 1.08907268562, 29864.334027309],
    [0.00000000029, 0.59718407064, 59728.668054618],
    [0.00000000031, 3.04423979263, 40879.4405046438],
    [0.00000000035, 0.32247158762, 1589.0728952838],
    [0.00000000031, 3.27727318906, 19992.85935454519],
    [0.00000000027, 5.83705748551, 17085.9586657222],
    [0.00000000032, 2.6426078826, 41962.5207369374],
    [0.00000000028, 4.90613317287, 29050.7837433492],
    [0.00000000025, 4.55050389739, 14919.0178537546],
    [0.00000000028, 3.58851614957, 40853.142184844],
    [0.00000000029, 2.79705093386, 20007.0864485468],
    [0.00000000033, 0.93862065616, 15720.8387848784],
    [0.00000000024, 2.74970637101, 18947.7045183576],
    [0.00000000024, 4.38966861409, 46386.9937433112],
    [0.00000000024, 0.73361964525, 9411.4646150872],
    [0.00000000028, 4.19559784013, 37674.9963942764],
    [0.00000000023, 1.00023735538, 22779.4372461938],
    [0.00000000026, 0.46990555736, 13745.3462390224],
    [0.00000000028, 4.65181292126, 1551.045222648],
    [0.00000000025, 4.18690270765, 44007.8292697396],
    [0.00000000022, 0.98102807789, 426.598190876],
    [0.0000000003, 1.24986033487, 27461.7108480654],
    [0.00000000027, 3.94986823486, 17468.8551979454],
    [0.00000000021, 6.09897508157, 18300.69368504279],
    [0.00000000025, 4.75875623888, 27991.40181316],
    [0.00000000022, 2.95281481673, 40077.61957352],
    [0.00000000028, 6.12038264955, 38500.2760310722],
    [0.00000000022, 4.11184201321, 19779.56025910719],
    [0.00000000027, 3.7244644608, 19793.7873531088],
    [0.0000000002, 4.27086627368, 31441.6775697568],
    [0.00000000022, 4.99040169444, 31022.7531708562],
    [0.00000000023, 1.33505132122, 65236.2212932854],
    [0.00000000021, 4.46897353468, 53285.1848352418],
    [0.0000000002, 4.15140915983, 2218.7571041868],
    [0.00000000025, 2.18447182965, 27511.4678735372],
    [0.00000000019, 1.43653410349, 27197.2816936676],
    [0.00000000027, 1.22555218015, 42430.4857272918],
    [0.00000000019, 3.65054338893, 49515.382508407],
    [0.00000000022, 5.88380811711, 10218.8084705184],
    [0.00000000018, 2.29853355765, 19264.0963880142],
    [0.00000000017, 5.44429906531, 6681.2248533996],
    [0.0000000002, 3.68116637773, 14128.2427712456],
    [0.00000000021, 4.30316190532, 44809.6502008634],
    [0.0000000002, 2.48583613985, 33794.5437235286],
    [0.00000000017, 3.02735393984, 28528.2063252554],
    [0.00000000019, 5.92656850674, 22805.7355659936],
    [0.00000000022, 5.30827572791, 10207.7626219036],
    [0.0000000002, 0.75829381378, 18314.9207790444],
    [0.00000000017, 5.63315744126, 16522.6597160022],
    [0.00000000016, 1.71021408448, 536.8045120954],
    [0.00000000015, 5.27016880041, 53445.5922046266],
    [0.00000000017, 5.61443395877, 47938.0389659592],
    [0.00000000015, 5.81110284451, 43071.8992890308],
    [0.00000000015, 4.96237667003, 19999.97290154599],
    [0.00000000018, 0.55618686515, 14765.2390432698],
    [0.00000000014, 3.48144272414, 29786.660256881],
    [0.00000000015, 5.84132627836, 10228.538017396],
    [0.00000000016, 1.05720065324, 26735.9452622132],
    [0.00000000014, 6.08462030302, 35371.8872659764],
    [0.00000000014, 2.8453287189, 574.3447983348],
    [0.00000000015, 5.3451771514, 10198.033075026],
    [0.00000000013, 0.45004137509, 20452.8694122218],
];

const R2: &[Term] = &[
    [0.00001406587, 5.0636639519, 10213.285546211],
    [0.00000015529, 5.47321687981, 20426.571092422],
    [0.00000013059, 0.0, 0.0],
    [0.00000001099, 2.78883988292, 9437.762934887],
    [0.00000000488, 6.27806914496, 1577.3435424478],
    [0.00000000361, 6.11914188253, 10404.7338123226],
    [0.0000000031, 1.38984998403, 5507.5532386674],
    [0.00000000389, 1.95017779915, 11015.1064773348],
    [0.00000000372, 2.33222828423, 775.522611324],
    [0.00000000207, 5.63406721595, 10239.5838660108],
    [0.00000000168, 1.10765197296, 13367.9726311066],
    [0.00000000175, 6.1667465295, 30639.856638633],
    [0.00000000168, 3.64495311632, 7084.8967811152],
    [0.0000000012, 5.85815843789, 9153.9036160218],
    [0.0000000016, 2.21564938463, 3154.6870848956],
    [0.00000000118, 2.62358866565, 8635.9420037632],
    [0.00000000112, 2.36235956804, 10596.1820784342],
    [0.00000000092, 0.72664449269, 12566.1516999828],
    [0.00000000067, 3.76089669118, 18837.49819713819],
    [0.00000000065, 2.4798370999, 11790.6290886588],
    [0.00000000048, 4.26620187144, 2352.8661537718],
    [0.00000000048, 5.5089818955, 191.4482661116],
    [0.00000000048, 2.54730918293, 17298.1823273262],
    [0.00000000046, 3.40293459332, 14143.4952424306],
    [0.00000000041, 1.83997113019, 11322.6640983044],
    [0.00000000037, 6.17871126027, 1109.3785520934],
    [0.00000000039, 4.77190210316, 18073.7049386502],
    [0.00000000035, 3.10133256432, 4705.7323075436],
    [0.00000000046, 3.30090415967, 6283.0758499914],
    [0.00000000034, 3.91721765773, 10021.8372800994],
    [0.00000000034, 3.24663787383, 22003.9146348698],
    [0.00000000042, 3.39360926939, 14945.3161735544],
    [0.00000000044, 4.42979374073, 7860.4193924392],
    [0.00000000034, 2.16381407025, 16496.3613962024],
    [0.00000000031, 0.45714618479, 26.2983197998],
    [0.00000000035, 3.62868651241, 801.8209311238],
    [0.00000000032, 1.84138997078, 382.8965322232],
    [0.00000000025, 3.32908650295, 18307.8072320436],
    [0.00000000026, 3.64313769818, 29088.811415985],
    [0.00000000029, 3.8296717881, 10186.9872264112],
    [0.00000000022, 3.17741520378, 28521.0927782546],
    [0.00000000021, 2.52643834111, 529.6909650946],
    [0.00000000025, 5.71401244457, 21202.093703746],
    [0.00000000021, 3.77813434325, 21228.3920235458],
    [0.00000000019, 5.24505118517, 19896.8801273274],
    [0.00000000018, 4.62463651925, 19651.048481098],
    [0.00000000016, 3.35893297896, 28286.9904848612],
    [0.00000000015, 5.05571633205, 33019.0211122046],
    [0.00000000014, 2.83786355803, 19786.67380610799],
    [0.00000000014, 1.79922718553, 9830.3890139878],
    [0.00000000014, 3.14801263138, 19367.1891622328],
    [0.00000000014, 3.57896195191, 10988.808157535],
    [0.00000000013, 3.06303088617, 10742.9765113056],
    [0.00000000013, 5.43981998532, 25158.6017197654],
    [0.00000000015, 4.83166312889, 18875.525869774],
    [0.00000000012, 2.54141086214, 7064.1213856228],
    [0.00000000012, 4.45255110769, 15720.8387848784],
    [0.0000000001, 1.87933121728, 24356.7807886416],
    [0.00000000011, 2.58708635685, 9103.9069941176],
    [0.0000000001, 2.179013099, 3723.508958923],
    [0.00000000008, 3.63520673832, 1059.3819301892],
    [0.00000000008, 4.67523115598, 25934.1243310894],
    [0.00000000009, 5.97856553283, 9683.5945811164],
];

const R3: &[Term] = &[
    [0.00000049582, 3.2226355452, 10213.285546211],
    [0.00000000831, 3.21219077104, 20426.571092422],
    [0.00000000112, PI, 0.0],
    [0.00000000013, 3.77448689585, 30639.856638633],
    [0.00000000009, 4.19802043629, 10239.5838660108],
    [0.00000000006, 0.20714935358, 10186.9872264112],
    [0.00000000005, 0.68781956122, 8635.9420037632],
];

const R4: &[Term] = &[
    [0.00000000573, 0.9222969782, 10213.285546211],
    [0.0000000004, 0.95468912157, 20426.571092422],
    [0.00000000006, PI, 0.0],
];

pub static VENUS: Vsop87Table = Vsop87Table {
    variables: Variables::Spherical,
    reference: Reference::EclipticOfDate,
    series: [
        &[L0, L1, L2, L3, L4, L5],
        &[B0, B1, B2, B3, B4, B5],
        &[R0, R1, R2, R3, R4],
    ],
};
